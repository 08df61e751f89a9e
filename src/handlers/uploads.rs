use crate::error::AppError;
use crate::models::UploadedFile;
use crate::utils::validation::{MIME_TYPES_FILES, MIME_TYPES_IMG, validate_mime_type};
use axum::{
    Json,
    extract::{Multipart, State},
    response::Html,
};

/// One multipart file part, buffered before any validation or disk write.
struct PendingFile {
    field_name: String,
    original_name: String,
    mime_type: String,
    bytes: axum::body::Bytes,
}

/// Drains the multipart stream and buffers every file part on the given
/// field. Fails before anything is written when the part count exceeds
/// `limit`, so an over-limit request never stores a partial batch.
async fn collect_files(
    multipart: &mut Multipart,
    field_name: &str,
    limit: usize,
) -> Result<Vec<PendingFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != field_name || field.file_name().is_none() {
            continue;
        }

        if files.len() == limit {
            return Err(AppError::TooManyFiles { limit });
        }

        let original_name = field.file_name().unwrap_or("unnamed").to_string();
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        files.push(PendingFile {
            field_name: name,
            original_name,
            mime_type,
            bytes,
        });
    }

    Ok(files)
}

/// Validates each buffered part against the allow-list, storing the ones
/// that pass. A rejected part is never written; accepted siblings of a
/// rejected part are kept. When several parts fail, the last failure is
/// the one reported.
async fn validate_and_store(
    state: &crate::AppState,
    files: Vec<PendingFile>,
    allowed: &[&str],
) -> Result<Vec<UploadedFile>, AppError> {
    let mut stored = Vec::with_capacity(files.len());
    let mut last_rejection = None;

    for file in files {
        match validate_mime_type(&file.mime_type, allowed) {
            Ok(()) => {
                let uploaded = state
                    .storage
                    .store(
                        &file.field_name,
                        &file.original_name,
                        &file.mime_type,
                        &file.bytes,
                    )
                    .await?;
                stored.push(uploaded);
            }
            Err(err) => {
                tracing::debug!("Rejected {}: {}", file.original_name, err);
                last_rejection = Some(err);
            }
        }
    }

    match last_rejection {
        Some(err) => Err(err),
        None => Ok(stored),
    }
}

#[utoipa::path(
    post,
    path = "/upload-single-file",
    request_body(content = String, content_type = "multipart/form-data", description = "One file on field `user-file`"),
    responses(
        (status = 200, description = "File stored", body = UploadedFile),
        (status = 400, description = "Missing file or rejected MIME type")
    )
)]
pub async fn upload_single_file(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedFile>, AppError> {
    let files = collect_files(&mut multipart, "user-file", 1).await?;
    if files.is_empty() {
        return Err(AppError::NoFileProvided("Please upload a file"));
    }

    let mut stored = validate_and_store(&state, files, MIME_TYPES_FILES).await?;
    // Non-empty by construction: one part in, validation passed
    let file = stored.remove(0);
    Ok(Json(file))
}

#[utoipa::path(
    post,
    path = "/upload-multiple-files",
    request_body(content = String, content_type = "multipart/form-data", description = "Up to 5 files on field `user-files`"),
    responses(
        (status = 200, description = "Files stored", body = [UploadedFile]),
        (status = 400, description = "Missing files, too many files, or rejected MIME type")
    )
)]
pub async fn upload_multiple_files(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadedFile>>, AppError> {
    let files = collect_files(&mut multipart, "user-files", 5).await?;
    if files.is_empty() {
        return Err(AppError::NoFileProvided("Please upload your files"));
    }

    let stored = validate_and_store(&state, files, MIME_TYPES_FILES).await?;
    Ok(Json(stored))
}

#[utoipa::path(
    post,
    path = "/upload-img",
    request_body(content = String, content_type = "multipart/form-data", description = "One image on field `user-img`"),
    responses(
        (status = 200, description = "HTML fragment embedding the stored image", content_type = "text/html", body = String),
        (status = 400, description = "Missing file or non-image MIME type")
    )
)]
pub async fn upload_img(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let files = collect_files(&mut multipart, "user-img", 1).await?;
    if files.is_empty() {
        return Err(AppError::NoFileProvided(
            "Please upload an image (jpeg, png, gif)",
        ));
    }

    let mut stored = validate_and_store(&state, files, MIME_TYPES_IMG).await?;
    let file = stored.remove(0);

    Ok(Html(format!(
        "<div>Your image is stored as \"{name}\": <img src=\"uploads/{name}\" width=\"400\" /></div>",
        name = file.stored_filename
    )))
}
