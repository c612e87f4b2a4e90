use super::*;

/// Tests the OpenAPI document lists the API and the bearer scheme.
///
/// Expected: 200 with article and upload paths and a `bearer` security scheme
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    let (status, doc) = app.send_json(get("/api/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/article/get/available"]["get"].is_object());
    assert!(doc["paths"]["/api/files/upload/image"]["post"].is_object());
    assert_eq!(doc["components"]["securitySchemes"]["bearer"]["scheme"], "bearer");

    Ok(())
}
