use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Location of a stored upload, relative to the server's working directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    pub path: String,
}

/// Multipart form accepted by the image upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
