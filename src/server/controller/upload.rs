use axum::{
    extract::{Multipart, Path, Request, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadImageForm, UploadedFileDto},
    },
    server::{
        error::{upload::UploadError, AppError},
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "files";

/// Multipart field carrying the uploaded image.
const FILE_FIELD: &str = "file";

/// Upload an image.
///
/// Reads the multipart field `file`, checks its MIME type and stores it under a
/// timestamped name in the upload directory.
///
/// # Arguments
/// - `state` - Application state containing the upload directory
/// - `multipart` - Multipart body with a `file` field
///
/// # Returns
/// - `201 Created` - Path of the stored file
/// - `400 Bad Request` - No `file` field or malformed multipart body
/// - `406 Not Acceptable` - File is not an accepted image type
/// - `413 Payload Too Large` - Body exceeds the upload size limit
#[utoipa::path(
    post,
    path = "/api/files/upload/image",
    tag = FILE_TAG,
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = UploadedFileDto),
        (status = 400, description = "No file uploaded", body = ErrorDto),
        (status = 406, description = "Only image files are allowed", body = ErrorDto),
        (status = 413, description = "File too large"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let service = UploadService::new(&state.upload_dir);

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(UploadError::from)?;

        let path = service
            .store_image(file_name.as_deref(), content_type.as_deref(), &bytes)
            .await?;

        return Ok((StatusCode::CREATED, Json(UploadedFileDto { path })));
    }

    Err(UploadError::MissingFile.into())
}

/// Serve a stored file.
///
/// # Arguments
/// - `state` - Application state containing the upload directory
/// - `name` - Stored file name
///
/// # Returns
/// - `200 OK` - The file, with a content type guessed from its extension
/// - `400 Bad Request` - Name contains a path separator or `..`
/// - `404 Not Found` - No such file
#[utoipa::path(
    get,
    path = "/api/files/{path}",
    tag = FILE_TAG,
    params(("path" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents"),
        (status = 400, description = "Invalid file path", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let path = UploadService::new(&state.upload_dir).resolve(&name).await?;

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    Ok(response.into_response())
}
