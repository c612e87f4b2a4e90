use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Multipart body had no `file` field.
    #[error("No file uploaded")]
    MissingFile,

    /// Uploaded file's MIME type is not an accepted image type.
    #[error("Only image files are allowed!")]
    UnsupportedMediaType(String),

    /// Requested file name contains path separators or parent references.
    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    /// Requested file does not exist in the upload directory.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Multipart body could not be parsed.
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// Converts upload errors into HTTP responses.
///
/// - `MissingFile` / `InvalidPath` / `Multipart` → 400 Bad Request
/// - `UnsupportedMediaType` → 406 Not Acceptable
/// - `FileNotFound` → 404 Not Found
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFile | Self::InvalidPath(_) | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnsupportedMediaType(_) => StatusCode::NOT_ACCEPTABLE,
            Self::FileNotFound(_) => StatusCode::NOT_FOUND,
        };

        let error = match self {
            Self::InvalidPath(_) => "Invalid file path".to_string(),
            Self::FileNotFound(_) => "File not found".to_string(),
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
