//! HTTP-level integration tests for login, token introspection and role
//! enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, get, get_auth, manager_token, post_json, student_token, token_for,
    ADMIN_EMAIL, ADMIN_PASSWORD, MANAGER_EMAIL, MANAGER_PASSWORD,
};
use dineflow_db::seed::DEMO_PASSWORD;
use serde_json::json;

// ---------------------------------------------------------------------------
// Student login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn student_login_returns_token_and_profile() {
    let app = common::build_test_app().await;

    let body = json!({ "email": "rohan.sharma@example.com", "password": DEMO_PASSWORD });
    let response = post_json(&app, "/api/auth/student/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["role"], "student");
    assert_eq!(json["data"]["user"]["id"], "s1");
    assert_eq!(json["data"]["user"]["name"], "Rohan Sharma");
    assert!(json["data"]["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn student_login_token_opens_student_routes() {
    let app = common::build_test_app().await;

    let body = json!({ "email": "priya.patel@example.com", "password": DEMO_PASSWORD });
    let json = body_json(post_json(&app, "/api/auth/student/login", body).await).await;
    let token = json["data"]["token"].as_str().unwrap().to_string();

    let response = get_auth(&app, "/api/student/summary", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn student_login_wrong_password_is_unauthorized() {
    let app = common::build_test_app().await;

    let body = json!({ "email": "rohan.sharma@example.com", "password": "wrong-password" });
    let response = post_json(&app, "/api/auth/student/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn student_login_unknown_email_is_unauthorized() {
    let app = common::build_test_app().await;

    let body = json!({ "email": "ghost@example.com", "password": DEMO_PASSWORD });
    let response = post_json(&app, "/api/auth/student/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn pending_registration_cannot_log_in() {
    let app = common::build_test_app().await;

    let body = json!({ "email": "kavita.iyer@example.com", "password": DEMO_PASSWORD });
    let response = post_json(&app, "/api/auth/student/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("pending approval"));
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/api/auth/student/login", json!({ "email": "  " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required field(s): email, password");
}

// ---------------------------------------------------------------------------
// Staff login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manager_and_admin_log_in_with_configured_credentials() {
    let app = common::build_test_app().await;

    let body = json!({ "email": MANAGER_EMAIL, "password": MANAGER_PASSWORD });
    let json = body_json(post_json(&app, "/api/auth/login", body).await).await;
    assert_eq!(json["data"]["role"], "manager");
    assert_eq!(json["data"]["user"]["email"], MANAGER_EMAIL);

    let body = json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let json = body_json(post_json(&app, "/api/auth/login", body).await).await;
    assert_eq!(json["data"]["role"], "admin");
}

#[tokio::test]
async fn staff_login_rejects_wrong_password() {
    let app = common::build_test_app().await;

    let body = json!({ "email": MANAGER_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(&app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Token introspection and RBAC
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_describes_student_and_staff() {
    let app = common::build_test_app().await;

    let json = body_json(get_auth(&app, "/api/auth/me", &student_token("s3")).await).await;
    assert_eq!(json["data"]["role"], "student");
    assert_eq!(json["data"]["user"]["name"], "Amit Singh");

    let json = body_json(get_auth(&app, "/api/auth/me", &manager_token()).await).await;
    assert_eq!(json["data"]["role"], "manager");
    assert_eq!(json["data"]["user"]["email"], MANAGER_EMAIL);
}

#[tokio::test]
async fn missing_or_invalid_token_is_unauthorized() {
    let app = common::build_test_app().await;

    let response = get(&app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(&app, "/api/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn student_token_cannot_reach_manager_routes() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/manager/students", &student_token("s1")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn staff_token_cannot_reach_student_routes() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/student/billing", &manager_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_oversight_is_admin_only() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/admin/complaints", &manager_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(&app, "/api/admin/complaints", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_inherits_manager_routes() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/manager/stats", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn any_role_reads_the_menu() {
    let app = common::build_test_app().await;

    for token in [student_token("s1"), manager_token(), token_for("admin", "admin")] {
        let response = get_auth(&app, "/api/student/menu", &token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
