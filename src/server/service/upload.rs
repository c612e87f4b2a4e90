//! Image upload storage.
//!
//! This module provides the `UploadService`, which validates uploaded images, derives a
//! collision-resistant file name from the client's name and the current time, writes the
//! file into the upload directory and resolves stored names back to paths for serving.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::server::error::{upload::UploadError, AppError};

/// MIME subtypes accepted by the image upload endpoint.
const IMAGE_SUBTYPES: [&str; 4] = ["/jpg", "/jpeg", "/png", "/gif"];

/// Stem used when the client's file name has no usable characters.
const FALLBACK_STEM: &str = "file";

/// Whether a MIME type names an accepted image format.
pub fn is_allowed_image(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    IMAGE_SUBTYPES
        .iter()
        .any(|subtype| content_type.ends_with(subtype))
}

/// Derives the stored file name from the client's file name.
///
/// The result is `{stem}-{timestamp}.{ext}`: the stem is everything before the first `.`,
/// the extension everything after it, and the timestamp is `now` in ISO-8601 with
/// millisecond precision and `:` replaced by `-`. Only ASCII letters, digits, `-` and `_`
/// survive in the stem (plus `.` in the extension), so the result never contains a path
/// separator or a parent reference. Without an extension the result is `{stem}-{timestamp}`.
///
/// # Arguments
/// - `original` - File name sent by the client
/// - `now` - Upload time
///
/// # Returns
/// - `String` - Name to store the file under
pub fn stored_filename(original: &str, now: DateTime<Utc>) -> String {
    let timestamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");

    let (stem, ext) = match original.split_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (original, None),
    };

    let stem: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let stem = if stem.is_empty() {
        FALLBACK_STEM
    } else {
        stem.as_str()
    };

    let ext = ext
        .map(|ext| {
            ext.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-' || *c == '_')
                .collect::<String>()
                .trim_matches('.')
                .to_string()
        })
        .filter(|ext| !ext.is_empty());

    match ext {
        Some(ext) => format!("{}-{}.{}", stem, timestamp, ext),
        None => format!("{}-{}", stem, timestamp),
    }
}

/// Service storing and resolving uploaded images.
pub struct UploadService<'a> {
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    /// Creates a new UploadService instance.
    ///
    /// # Arguments
    /// - `upload_dir` - Directory files are stored in, created on first upload
    ///
    /// # Returns
    /// - `UploadService` - New service instance
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Stores an uploaded image.
    ///
    /// # Arguments
    /// - `original_name` - File name sent by the client, if any
    /// - `content_type` - MIME type sent by the client, if any
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file, `<upload_dir>/<filename>`
    /// - `Err(AppError::UploadErr(UnsupportedMediaType))` - Not an accepted image type
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn store_image(
        &self,
        original_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        let content_type = content_type.unwrap_or_default();
        if !is_allowed_image(content_type) {
            return Err(UploadError::UnsupportedMediaType(content_type.to_string()).into());
        }

        let filename = stored_filename(original_name.unwrap_or(FALLBACK_STEM), Utc::now());

        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&filename), bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(format!("{}/{}", self.upload_dir.display(), filename))
    }

    /// Resolves a stored file name to its path.
    ///
    /// # Arguments
    /// - `name` - Stored file name, as returned by `store_image` without the directory
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of an existing file inside the upload directory
    /// - `Err(UploadError::InvalidPath)` - Name is empty or contains a separator or `..`
    /// - `Err(UploadError::FileNotFound)` - No such file
    pub async fn resolve(&self, name: &str) -> Result<PathBuf, UploadError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(UploadError::InvalidPath(name.to_string()));
        }

        let path = self.upload_dir.join(name);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(path),
            _ => Err(UploadError::FileNotFound(name.to_string())),
        }
    }
}
