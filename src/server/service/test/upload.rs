use super::*;
use crate::server::{
    error::upload::UploadError,
    service::upload::{is_allowed_image, stored_filename, UploadService},
};
use chrono::{TimeZone, Utc};

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 13, 45, 7).unwrap()
        + chrono::Duration::milliseconds(250)
}

/// Tests the stored name of an ordinary image.
///
/// Expected: stem, dashed timestamp and extension
#[test]
fn filename_keeps_stem_and_extension() {
    assert_eq!(
        stored_filename("avatar.png", fixed_time()),
        "avatar-2026-10-19T13-45-07.250Z.png"
    );
}

/// Tests that everything after the first dot is the extension.
///
/// Expected: stem before the first dot, `tar.gz` kept whole
#[test]
fn filename_splits_at_first_dot() {
    assert_eq!(
        stored_filename("archive.tar.gz", fixed_time()),
        "archive-2026-10-19T13-45-07.250Z.tar.gz"
    );
}

/// Tests a name without an extension.
///
/// Expected: no trailing dot
#[test]
fn filename_without_extension() {
    assert_eq!(
        stored_filename("README", fixed_time()),
        "README-2026-10-19T13-45-07.250Z"
    );
}

/// Tests that path components cannot survive sanitization.
///
/// Expected: no separators or parent references in the stored name
#[test]
fn filename_strips_path_components() {
    let name = stored_filename("../../etc/passwd", fixed_time());

    assert!(!name.contains('/'));
    assert!(!name.contains(".."));
    assert!(name.starts_with("file-2026-10-19T13-45-07.250Z"));

    let name = stored_filename("dir\\my photo!.jpg", fixed_time());
    assert_eq!(name, "dirmyphoto-2026-10-19T13-45-07.250Z.jpg");
}

/// Tests which MIME types count as images.
///
/// Expected: jpg, jpeg, png and gif accepted, anything else rejected
#[test]
fn accepts_only_image_types() {
    assert!(is_allowed_image("image/png"));
    assert!(is_allowed_image("image/jpeg"));
    assert!(is_allowed_image("image/jpg"));
    assert!(is_allowed_image("IMAGE/GIF"));
    assert!(!is_allowed_image("image/webp"));
    assert!(!is_allowed_image("application/pdf"));
    assert!(!is_allowed_image("text/plain"));
}

/// Tests storing an image and resolving it back.
///
/// Expected: Ok path inside the upload dir, file content preserved
#[tokio::test]
async fn stores_and_resolves_image() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let upload_dir = dir.path().join("files");
    let service = UploadService::new(&upload_dir);

    let path = service
        .store_image(Some("cat.gif"), Some("image/gif"), b"GIF89a")
        .await?;

    let prefix = format!("{}/", upload_dir.display());
    assert!(path.starts_with(&prefix));
    let name = path.trim_start_matches(&prefix);
    assert!(name.starts_with("cat-"));
    assert!(name.ends_with(".gif"));

    let resolved = service.resolve(name).await?;
    assert_eq!(tokio::fs::read(resolved).await?, b"GIF89a");

    Ok(())
}

/// Tests storing a file that is not an image.
///
/// Expected: Err(UnsupportedMediaType) and nothing written
#[tokio::test]
async fn rejects_non_image() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path());

    let result = service
        .store_image(Some("notes.txt"), Some("text/plain"), b"hello")
        .await;

    assert!(matches!(
        result,
        Err(AppError::UploadErr(UploadError::UnsupportedMediaType(_)))
    ));
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}

/// Tests resolving names that try to escape the upload directory.
///
/// Expected: Err(InvalidPath) for traversal, Err(FileNotFound) for unknown names
#[tokio::test]
async fn resolve_rejects_traversal() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path());

    assert!(matches!(
        service.resolve("../secret").await,
        Err(UploadError::InvalidPath(_))
    ));
    assert!(matches!(
        service.resolve("..").await,
        Err(UploadError::InvalidPath(_))
    ));
    assert!(matches!(
        service.resolve("missing.png").await,
        Err(UploadError::FileNotFound(_))
    ));

    Ok(())
}
