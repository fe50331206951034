//! Facility domain model
//!
//! A [`FacilityRecord`] is the typed view of one upstream facility object. The
//! original JSON object is kept alongside the typed fields so that output records
//! can reproduce every field the upstream system sent, including ones this crate
//! does not model.

use super::accreditation::AccreditationRecord;
use super::errors::RecordErrorKind;
use super::ids::FacilityId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the facility identifier
pub const FIELD_FACILITY_ID: &str = "facility_id";
/// Field holding the facility name
pub const FIELD_FACILITY_NAME: &str = "facility_name";

/// Postal location of a facility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// A laboratory operated by a facility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    #[serde(default)]
    pub lab_name: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Healthcare facility record
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRecord {
    /// Facility identifier (unique within a batch)
    pub id: FacilityId,

    /// Display name
    pub name: String,

    /// Postal location, if supplied
    pub location: Option<Location>,

    /// Number of employees
    pub employee_count: u64,

    /// Offered services (unordered)
    pub services: Vec<String>,

    /// Laboratories
    pub labs: Vec<Lab>,

    /// Accreditations in upstream order
    pub accreditations: Vec<AccreditationRecord>,

    source: Map<String, Value>,
}

impl FacilityRecord {
    /// Builds a facility from an upstream JSON object
    ///
    /// `facility_id` and `facility_name` must be non-empty strings. Descriptive fields
    /// (`location`, `employee_count`, `services`, `labs`) that are absent, `null`, or
    /// of the wrong shape take empty defaults. An `accreditations` value that is not a
    /// list of objects rejects the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel::domain::FacilityRecord;
    /// use serde_json::json;
    ///
    /// let json = json!({"facility_id": "FAC001", "facility_name": "Test Hospital"});
    /// let facility = FacilityRecord::from_object(json.as_object().unwrap().clone()).unwrap();
    /// assert_eq!(facility.id.as_str(), "FAC001");
    /// assert!(facility.accreditations.is_empty());
    /// ```
    pub fn from_object(object: Map<String, Value>) -> Result<Self, RecordErrorKind> {
        let id = required_string(&object, FIELD_FACILITY_ID)?;
        let id = FacilityId::new(id).map_err(|_| RecordErrorKind::MissingField(FIELD_FACILITY_ID))?;
        let name = required_string(&object, FIELD_FACILITY_NAME)?;

        let location = lenient_field::<Location>(&object, "location");
        let employee_count = lenient_field::<u64>(&object, "employee_count").unwrap_or(0);
        let services = lenient_field::<Vec<String>>(&object, "services").unwrap_or_default();
        let labs = lenient_field::<Vec<Lab>>(&object, "labs").unwrap_or_default();
        let accreditations =
            optional_field::<Vec<AccreditationRecord>>(&object, "accreditations")?
                .unwrap_or_default();

        Ok(Self {
            id,
            name,
            location,
            employee_count,
            services,
            labs,
            accreditations,
            source: object,
        })
    }

    /// Builds a facility from any JSON value, rejecting non-objects
    pub fn from_value(value: Value) -> Result<Self, RecordErrorKind> {
        match value {
            Value::Object(object) => Self::from_object(object),
            _ => Err(RecordErrorKind::NotAnObject),
        }
    }

    /// The upstream object this record was loaded from
    pub fn source(&self) -> &Map<String, Value> {
        &self.source
    }

    /// Number of accreditations on the facility, whatever their status
    pub fn accreditation_count(&self) -> usize {
        self.accreditations.len()
    }
}

/// Reads a facility identifier from a raw object for error reporting
pub(crate) fn peek_facility_id(object: &Map<String, Value>) -> Option<String> {
    object
        .get(FIELD_FACILITY_ID)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn required_string(object: &Map<String, Value>, field: &'static str) -> Result<String, RecordErrorKind> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(RecordErrorKind::MissingField(field))
        }
        Some(other) => Err(RecordErrorKind::InvalidField {
            field: field.to_string(),
            message: format!("expected a string, got {}", json_type_name(other)),
        }),
    }
}

fn optional_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<T>, RecordErrorKind> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| RecordErrorKind::InvalidField {
                field: field.to_string(),
                message: e.to_string(),
            }),
    }
}

/// Reads a descriptive field, falling back to `None` when it has the wrong shape
///
/// These fields are never evaluated and the output reproduces them from the source
/// object, so a bad shape only loses the typed view.
fn lenient_field<T: DeserializeOwned>(object: &Map<String, Value>, field: &str) -> Option<T> {
    match optional_field::<T>(object, field) {
        Ok(value) => value,
        Err(kind) => {
            tracing::debug!(
                facility_id = ?peek_facility_id(object),
                field = field,
                reason = %kind,
                "Ignoring malformed descriptive field"
            );
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn facility(value: Value) -> Result<FacilityRecord, RecordErrorKind> {
        FacilityRecord::from_value(value)
    }

    #[test]
    fn test_full_record() {
        let record = facility(json!({
            "facility_id": "FAC001",
            "facility_name": "Test Hospital",
            "location": {"address": "1 Main St", "city": "Springfield", "state": "IL", "zip": "62701"},
            "employee_count": 100,
            "services": ["Emergency", "Radiology"],
            "labs": [{"lab_name": "Core Lab", "certifications": ["CLIA"]}],
            "accreditations": [
                {"accreditation_body": "Joint Commission", "accreditation_id": "JC-1", "valid_until": "2024-03-15"}
            ]
        }))
        .unwrap();

        assert_eq!(record.id.as_str(), "FAC001");
        assert_eq!(record.name, "Test Hospital");
        assert_eq!(record.employee_count, 100);
        assert_eq!(record.services.len(), 2);
        assert_eq!(record.labs[0].certifications, vec!["CLIA".to_string()]);
        assert_eq!(
            record.location.as_ref().and_then(|l| l.city.as_deref()),
            Some("Springfield")
        );
        assert_eq!(record.accreditation_count(), 1);
    }

    #[test]
    fn test_optional_fields_default() {
        let record = facility(json!({
            "facility_id": "FAC002",
            "facility_name": "Safe Clinic",
            "labs": null
        }))
        .unwrap();

        assert_eq!(record.employee_count, 0);
        assert!(record.location.is_none());
        assert!(record.services.is_empty());
        assert!(record.labs.is_empty());
        assert!(record.accreditations.is_empty());
    }

    #[test]
    fn test_missing_facility_id() {
        let err = facility(json!({"facility_name": "No Id"})).unwrap_err();
        assert_eq!(err, RecordErrorKind::MissingField(FIELD_FACILITY_ID));
    }

    #[test]
    fn test_blank_facility_name() {
        let err = facility(json!({"facility_id": "FAC003", "facility_name": "  "})).unwrap_err();
        assert_eq!(err, RecordErrorKind::MissingField(FIELD_FACILITY_NAME));
    }

    #[test]
    fn test_non_string_facility_id() {
        let err = facility(json!({"facility_id": 17, "facility_name": "Numbered"})).unwrap_err();
        assert!(matches!(err, RecordErrorKind::InvalidField { ref field, .. } if field == "facility_id"));
    }

    #[test]
    fn test_malformed_descriptive_fields_default() {
        let record = facility(json!({
            "facility_id": "FAC004",
            "facility_name": "Odd",
            "location": {"city": "Springfield", "zip": 62701},
            "employee_count": "120",
            "services": "Emergency",
            "labs": [{"lab_name": 7}],
            "accreditations": [
                {"accreditation_body": "JC", "accreditation_id": "JC-4", "valid_until": "2024-03-15"}
            ]
        }))
        .unwrap();

        assert!(record.location.is_none());
        assert_eq!(record.employee_count, 0);
        assert!(record.services.is_empty());
        assert!(record.labs.is_empty());
        assert_eq!(record.accreditation_count(), 1);
        assert_eq!(record.source().get("employee_count"), Some(&json!("120")));
    }

    #[test]
    fn test_negative_employee_count_defaults() {
        let record = facility(json!({
            "facility_id": "FAC004",
            "facility_name": "Odd",
            "employee_count": -5
        }))
        .unwrap();
        assert_eq!(record.employee_count, 0);
    }

    #[test]
    fn test_non_list_accreditations_rejected() {
        let err = facility(json!({
            "facility_id": "FAC007",
            "facility_name": "Scalar",
            "accreditations": "JC"
        }))
        .unwrap_err();
        assert!(matches!(err, RecordErrorKind::InvalidField { ref field, .. } if field == "accreditations"));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(facility(json!(["a"])).unwrap_err(), RecordErrorKind::NotAnObject);
    }

    #[test]
    fn test_source_keeps_unknown_fields() {
        let record = facility(json!({
            "facility_id": "FAC005",
            "facility_name": "Extra",
            "region_code": "NE-4"
        }))
        .unwrap();
        assert_eq!(record.source().get("region_code"), Some(&json!("NE-4")));
    }

    #[test]
    fn test_peek_facility_id() {
        let obj = json!({"facility_id": "FAC006"});
        assert_eq!(
            peek_facility_id(obj.as_object().unwrap()),
            Some("FAC006".to_string())
        );
        let obj = json!({"facility_id": ""});
        assert_eq!(peek_facility_id(obj.as_object().unwrap()), None);
    }
}
