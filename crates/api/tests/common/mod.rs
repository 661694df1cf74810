#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use dineflow_api::auth::jwt::{generate_access_token, JwtConfig};
use dineflow_api::config::{ServerConfig, StaffAccount};
use dineflow_api::router::build_app_router;
use dineflow_api::state::AppState;
use dineflow_core::roles::{ROLE_ADMIN, ROLE_MANAGER, ROLE_STUDENT};
use dineflow_db::Repositories;

pub const MANAGER_EMAIL: &str = "manager@test.local";
pub const MANAGER_PASSWORD: &str = "manager-pass";
pub const ADMIN_EMAIL: &str = "admin@test.local";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Build a test `ServerConfig` with safe defaults and known staff logins.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_demo_data: true,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        manager: StaffAccount {
            email: MANAGER_EMAIL.to_string(),
            password: MANAGER_PASSWORD.to_string(),
            name: "Mess Manager".to_string(),
            role: ROLE_MANAGER,
        },
        admin: StaffAccount {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            name: "Administrator".to_string(),
            role: ROLE_ADMIN,
        },
    }
}

/// A running app over seeded in-memory stores. The repositories are exposed
/// so tests can inspect store contents directly.
pub struct TestApp {
    pub router: Router,
    pub repos: Repositories,
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over freshly seeded in-memory stores.
pub async fn build_test_app() -> TestApp {
    let repos = Repositories::in_memory();
    repos.ensure_seed().await.expect("seeding should succeed");
    build_app_with(repos)
}

/// Build the app over the given (possibly empty) repositories.
pub fn build_app_with(repos: Repositories) -> TestApp {
    let config = test_config();
    let state = AppState {
        repos: repos.clone(),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state, &config),
        repos,
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(subject: &str, role: &str) -> String {
    generate_access_token(subject, role, &test_config().jwt).expect("token generation")
}

pub fn student_token(student_id: &str) -> String {
    token_for(student_id, ROLE_STUDENT)
}

pub fn manager_token() -> String {
    token_for(ROLE_MANAGER, ROLE_MANAGER)
}

pub fn admin_token() -> String {
    token_for(ROLE_ADMIN, ROLE_ADMIN)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &TestApp, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &TestApp,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: &TestApp,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Send a raw body with a JSON content type.
pub async fn post_raw(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the records in an envelope's `data` array.
pub fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data must be an array")
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
