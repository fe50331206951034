//! Local filesystem storage
//!
//! Reads either a single payload file or every matching file in a directory, and
//! writes output files into one directory.

use super::traits::Storage;
use crate::domain::{Result, SentinelError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Filesystem-backed [`Storage`]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    input_path: PathBuf,
    extensions: Vec<String>,
    output_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage adapter
    ///
    /// `extensions` are matched case-insensitively and may be given with or without
    /// a leading dot.
    pub fn new(
        input_path: impl Into<PathBuf>,
        extensions: &[String],
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .collect(),
            output_dir: output_dir.into(),
        }
    }

    /// Directory that receives output files
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    async fn write_atomic(&self, target: &Path, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("output");
        let staging = self
            .output_dir
            .join(format!(".{file_name}.{}.partial", uuid::Uuid::new_v4()));

        tokio::fs::write(&staging, data).await?;
        if let Err(e) = tokio::fs::rename(&staging, target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e);
        }
        Ok(())
    }
}

/// Maps an input discovery failure to a storage error
fn listing_error(context: &str, path: &Path, err: std::io::Error) -> SentinelError {
    SentinelError::Storage(format!("{context} {}: {err}", path.display()))
}

#[async_trait]
impl Storage for LocalStorage {
    async fn list_inputs(&self) -> Result<Vec<String>> {
        let metadata = tokio::fs::metadata(&self.input_path)
            .await
            .map_err(|e| listing_error("Cannot access input path", &self.input_path, e))?;

        if metadata.is_file() {
            return Ok(vec![self.input_path.to_string_lossy().into_owned()]);
        }

        let mut entries = tokio::fs::read_dir(&self.input_path)
            .await
            .map_err(|e| listing_error("Cannot list input directory", &self.input_path, e))?;

        let mut inputs = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| listing_error("Cannot list input directory", &self.input_path, e))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| listing_error("Cannot inspect", &path, e))?;
            if file_type.is_file() && self.matches_extension(&path) {
                inputs.push(path.to_string_lossy().into_owned());
            }
        }
        inputs.sort();

        tracing::info!(
            input_path = %self.input_path.display(),
            count = inputs.len(),
            "Found input files"
        );
        Ok(inputs)
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>> {
        tracing::info!(key = %key, "Reading input file");
        tokio::fs::read(key)
            .await
            .map_err(|e| SentinelError::Storage(format!("Failed to read {key}: {e}")))
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        let target = self.output_dir.join(key);
        self.write_atomic(&target, data).await.map_err(|e| {
            SentinelError::WriteFailure(format!("Failed to write {}: {e}", target.display()))
        })?;

        tracing::info!(
            location = %target.display(),
            bytes = data.len(),
            "Wrote output file"
        );
        Ok(())
    }

    fn output_location(&self, key: &str) -> String {
        self.output_dir.join(key).to_string_lossy().into_owned()
    }
}
