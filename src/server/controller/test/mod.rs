use std::{path::PathBuf, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    error::AppError, router::router, service::token::TokenService, state::AppState,
};

mod auth;
mod docs;

const TEST_BCRYPT_COST: u32 = 4;
const TEST_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Router wired to an in-memory database and a temporary upload directory.
struct TestApp {
    test: TestContext,
    _upload_dir: TempDir,
    tokens: Arc<TokenService>,
    router: Router,
}

impl TestApp {
    async fn new() -> Result<Self, AppError> {
        let test = TestBuilder::new().with_market_tables().build().await.unwrap();
        let upload_dir = TempDir::new()?;
        let tokens = Arc::new(TokenService::new("test-secret", 7));

        let state = AppState {
            db: test.db.clone().unwrap(),
            tokens: tokens.clone(),
            bcrypt_cost: TEST_BCRYPT_COST,
            upload_dir: Arc::new(PathBuf::from(upload_dir.path())),
        };

        Ok(Self {
            test,
            _upload_dir: upload_dir,
            tokens,
            router: router(TEST_MAX_UPLOAD_BYTES).with_state(state),
        })
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    fn token_for(&self, user: &entity::user::Model) -> String {
        self.tokens.sign(user.id, &user.email).unwrap().0
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>, Option<String>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, body.to_vec(), content_type)
    }

    async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body, _) = self.send(request).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, json)
    }
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}
