use serde::Serialize;
use utoipa::ToSchema;

/// Metadata for one accepted file, created at the moment the handler
/// persists it. Returned as-is in JSON responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadedFile {
    /// Multipart field the file arrived on
    pub field_name: String,
    /// Client-supplied filename (untrusted)
    pub original_name: String,
    /// Date-prefixed name the file is stored under
    pub stored_filename: String,
    /// Declared MIME type (untrusted, not verified against the bytes)
    pub mime_type: String,
    /// Size in bytes
    pub size: usize,
    /// Path the file was written to
    pub path: String,
}
