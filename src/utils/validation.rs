use crate::error::AppError;
use std::path::Path;

/// MIME types accepted by the image-only endpoint
pub const MIME_TYPES_IMG: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// MIME types accepted by the generic upload endpoints: images plus
/// common document formats
pub const MIME_TYPES_FILES: &[&str] = &[
    // Images
    "image/jpeg",
    "image/png",
    "image/gif",
    // Text
    "text/plain",
    "text/html",
    "text/css",
    "text/csv",
    // Office documents
    "application/msword",
    "application/vnd.ms-powerpoint",
    "application/vnd.ms-excel",
    "application/vnd.oasis.opendocument.presentation",
    "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.oasis.opendocument.text",
    "application/pdf",
    "application/rtf",
];

/// Validates a part's declared MIME type against an endpoint's allow-list.
/// The check is an exact string match on the declared `Content-Type`; the
/// file's actual bytes are never inspected. Parameters after a `;` are
/// stripped before comparison.
pub fn validate_mime_type(content_type: &str, allowed: &[&str]) -> Result<(), AppError> {
    let normalized = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    if allowed.iter().any(|&mime| mime == normalized) {
        return Ok(());
    }

    Err(AppError::MimeTypeRejected(content_type.to_string()))
}

/// Sanitizes a client-supplied filename before the date prefix is applied.
/// Strips any path components and replaces control or reserved characters,
/// so the stored name can never escape the uploads directory.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    // Strip path components, Windows separators included
    let last = filename.rsplit(['/', '\\']).next().unwrap_or("");
    let name = Path::new(last)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() {
        return Err(AppError::InvalidFilename);
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || c == '/'
                || c == '\\'
                || c == ':'
                || c == '*'
                || c == '?'
                || c == '"'
                || c == '<'
                || c == '>'
                || c == '|'
                || c == ';'
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    // Limit length safely for UTF-8
    let sanitized = if sanitized.len() > 255 {
        let mut end = 255;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized[..end].to_string()
    } else {
        sanitized
    };

    Ok(sanitized)
}
