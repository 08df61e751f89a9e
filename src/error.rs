use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request contained no file part for the required field; carries the
    /// endpoint-specific "please upload" message
    #[error("{0}")]
    NoFileProvided(&'static str),

    #[error("Mimetype of file is not accepted: {0}")]
    MimeTypeRejected(String),

    #[error("Too many files uploaded, the limit is {limit}")]
    TooManyFiles { limit: usize },

    #[error("Invalid filename")]
    InvalidFilename,

    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Io(e) => {
                tracing::error!("Storage I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            _ => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
