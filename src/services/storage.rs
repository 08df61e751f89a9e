use crate::error::AppError;
use crate::models::UploadedFile;
use crate::utils::validation::sanitize_filename;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes accepted uploads flatly into a single directory, each under a
/// date-prefixed name. The prefix is computed once at startup and injected
/// here, so it stays fixed for the whole process run.
pub struct DiskStorage {
    upload_dir: PathBuf,
    date_prefix: String,
}

impl DiskStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, date_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            date_prefix: date_prefix.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn date_prefix(&self) -> &str {
        &self.date_prefix
    }

    /// Name a file will be stored under: `<prefix>-<sanitized original>`.
    pub fn stored_filename(&self, original_name: &str) -> Result<String, AppError> {
        let sanitized = sanitize_filename(original_name)?;
        Ok(format!("{}-{}", self.date_prefix, sanitized))
    }

    /// Persists one accepted file. An existing file with the same stored
    /// name is silently overwritten, so re-uploading the same filename on
    /// the same day replaces the earlier copy.
    pub async fn store(
        &self,
        field_name: &str,
        original_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> Result<UploadedFile, AppError> {
        let stored_filename = self.stored_filename(original_name)?;
        let path = self.upload_dir.join(&stored_filename);

        tokio::fs::write(&path, bytes).await?;
        info!("Stored {} ({} bytes)", stored_filename, bytes.len());

        Ok(UploadedFile {
            field_name: field_name.to_string(),
            original_name: original_name.to_string(),
            stored_filename,
            mime_type: mime_type.to_string(),
            size: bytes.len(),
            path: path.to_string_lossy().into_owned(),
        })
    }
}
