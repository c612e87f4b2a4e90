use serde_json::json;

use super::*;

/// Tests registering, logging in and reading the account with the returned token.
///
/// Expected: 201 on register, 200 on login, /user/get/me returns the seller without a password
#[tokio::test]
async fn register_login_and_fetch_me() -> Result<(), AppError> {
    let app = TestApp::new().await?;
    let credentials = json!({
        "email": "alice@example.com",
        "username": "alice",
        "password": "correct-horse"
    });

    let (status, body) = app
        .send_json(with_json("POST", "/auth/register", None, credentials))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["access_token"].is_string());

    let (status, body) = app
        .send_json(with_json(
            "POST",
            "/auth/login",
            None,
            json!({ "email": "alice@example.com", "password": "correct-horse" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, me) = app.send_json(get("/user/get/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "alice");
    assert_eq!(me["role"], "seller");
    assert!(me["active_cart_id"].is_i64());
    assert!(me.get("password").is_none());
    assert!(me.get("hashed_password").is_none());

    Ok(())
}

/// Tests registering twice with the same email.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    let first = json!({ "email": "bob@example.com", "username": "bob", "password": "password1" });
    let second = json!({ "email": "bob@example.com", "username": "bobby", "password": "password1" });

    let (status, _) = app
        .send_json(with_json("POST", "/auth/register", None, first))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send_json(with_json("POST", "/auth/register", None, second))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests registering with a malformed payload.
///
/// Expected: 400 Bad Request mentioning the failed field
#[tokio::test]
async fn register_rejects_invalid_payload() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    let (status, body) = app
        .send_json(with_json(
            "POST",
            "/auth/register",
            None,
            json!({ "email": "not-an-email", "username": "carol", "password": "password1" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email must be a valid address");

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), AppError> {
    let app = TestApp::new().await?;

    app.send_json(with_json(
        "POST",
        "/auth/register",
        None,
        json!({ "email": "dave@example.com", "username": "dave", "password": "password1" }),
    ))
    .await;

    let (status, _) = app
        .send_json(with_json(
            "POST",
            "/auth/login",
            None,
            json!({ "email": "dave@example.com", "password": "password2" }),
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}
