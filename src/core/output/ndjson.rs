//! Newline-delimited JSON writer

use crate::domain::{EnrichedFacility, Result, SentinelError};
use std::io::Write;

/// Serializes enriched facilities as newline-delimited JSON
///
/// Each line is the facility's original object plus `_processing_metadata`. Order
/// follows the input slice. Every record, including the last, ends with `\n`; an
/// empty slice produces an empty buffer.
///
/// # Examples
///
/// ```
/// use sentinel::core::output::write_ndjson;
///
/// let bytes = write_ndjson(&[]).unwrap();
/// assert!(bytes.is_empty());
/// ```
pub fn write_ndjson(facilities: &[EnrichedFacility]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_ndjson_to(&mut buffer, facilities)?;
    Ok(buffer)
}

/// Serializes enriched facilities into any writer
pub fn write_ndjson_to<W: Write>(writer: &mut W, facilities: &[EnrichedFacility]) -> Result<()> {
    for enriched in facilities {
        let object = enriched.to_output_object().map_err(|e| {
            SentinelError::Serialization(format!(
                "failed to serialize facility {}: {e}",
                enriched.facility.id
            ))
        })?;
        serde_json::to_writer(&mut *writer, &object)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
