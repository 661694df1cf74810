//! HTTP-level integration tests for the student portal.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, ids, post_json, post_json_auth, post_raw, student_token,
};
use chrono::Utc;
use dineflow_core::status::{BillStatus, RequestStatus};
use dineflow_db::models::bill::Bill;
use dineflow_db::store::Repository;
use serde_json::json;

fn registration(email: &str) -> serde_json::Value {
    json!({
        "name": "Neha Verma",
        "email": email,
        "phone": "9988776655",
        "roomNumber": "E-12",
        "password": "correct-horse",
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registration_creates_one_pending_request() {
    let app = common::build_test_app().await;
    let before = app.repos.student_requests.count().await.unwrap();

    let response = post_json(&app, "/api/student/register", registration("neha@example.com")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "Pending");
    assert!(json["data"].get("passwordHash").is_none());

    let id = json["data"]["id"].as_str().unwrap();
    assert_eq!(app.repos.student_requests.count().await.unwrap(), before + 1);

    let stored = app.repos.student_requests.find(id).await.unwrap().unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);
    assert_eq!(stored.room_number, "E-12");
    assert!(stored.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn registration_ids_are_unique() {
    let app = common::build_test_app().await;

    let a = body_json(post_json(&app, "/api/student/register", registration("a@example.com")).await).await;
    let b = body_json(post_json(&app, "/api/student/register", registration("b@example.com")).await).await;

    assert_ne!(a["data"]["id"], b["data"]["id"]);
}

#[tokio::test]
async fn registration_reports_every_missing_field() {
    let app = common::build_test_app().await;
    let before = app.repos.student_requests.count().await.unwrap();

    let body = json!({ "name": "Neha", "email": "", "phone": "9988776655" });
    let response = post_json(&app, "/api/student/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Missing required field(s): email, roomNumber, password"
    );
    assert_eq!(app.repos.student_requests.count().await.unwrap(), before);
}

#[tokio::test]
async fn registration_with_taken_email_conflicts() {
    let app = common::build_test_app().await;

    // Approved student.
    let response = post_json(
        &app,
        "/api/student/register",
        registration("Rohan.Sharma@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Pending request.
    let response = post_json(&app, "/api/student/register", registration("kavita.iyer@example.com")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn registration_rejects_short_password() {
    let app = common::build_test_app().await;

    let mut body = registration("short@example.com");
    body["password"] = json!("abc");
    let response = post_json(&app, "/api/student/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_gets_error_envelope() {
    let app = common::build_test_app().await;

    let response = post_raw(&app, "/api/student/register", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Dashboard and billing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn summary_shows_dues_menu_and_recent_complaints() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/student/summary", &student_token("s1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["student"]["name"], "Rohan Sharma");
    assert_eq!(data["currentDue"]["amount"], 3500);
    assert!(data["currentDue"]["dueDate"].is_string());
    assert!(data["todaysMenu"]["breakfast"].is_array());
    assert!(data["today"].is_string());
    assert_eq!(data["recentComplaints"][0]["id"], "c1");
    assert_eq!(data["recentComplaints"][0]["status"], "Resolved");
}

#[tokio::test]
async fn summary_keeps_at_most_three_recent_complaints() {
    let app = common::build_test_app().await;
    let token = student_token("s4");

    for n in 0..4 {
        let body = json!({ "title": format!("Issue {n}"), "description": "details" });
        let response = post_json_auth(&app, "/api/student/complaints", &token, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get_auth(&app, "/api/student/summary", &token).await).await;
    assert_eq!(json["data"]["recentComplaints"].as_array().unwrap().len(), 3);
    // Overdue bill b4.
    assert_eq!(json["data"]["currentDue"]["amount"], 3500);
}

#[tokio::test]
async fn summary_for_deleted_student_is_not_found() {
    let app = common::build_test_app().await;

    let response = get_auth(&app, "/api/student/summary", &student_token("gone")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summary_reports_overflowing_dues_as_internal_error() {
    let app = common::build_test_app().await;
    app.repos
        .bills
        .create(Bill {
            id: "b-huge".into(),
            student_id: "s1".into(),
            month: "September 2025".into(),
            amount: i64::MAX,
            status: BillStatus::Overdue,
            due_date: Utc::now(),
            paid_date: None,
        })
        .await
        .unwrap();

    let response = get_auth(&app, "/api/student/summary", &student_token("s1")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn billing_lists_only_the_callers_bills() {
    let app = common::build_test_app().await;

    let json = body_json(get_auth(&app, "/api/student/billing", &student_token("s2")).await).await;

    assert_eq!(ids(&json), vec!["b2"]);
    assert_eq!(json["data"][0]["status"], "Paid");
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complaint_without_title_or_description_is_rejected() {
    let app = common::build_test_app().await;
    let token = student_token("s1");
    let before = app.repos.complaints.count().await.unwrap();

    let body = json!({ "title": "   ", "description": "Cold food" });
    let response = post_json_auth(&app, "/api/student/complaints", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field(s): title");

    let body = json!({ "title": "Cold food" });
    let response = post_json_auth(&app, "/api/student/complaints", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(app.repos.complaints.count().await.unwrap(), before);
}

#[tokio::test]
async fn new_complaint_is_pending_and_listed_first() {
    let app = common::build_test_app().await;
    let token = student_token("s1");

    let body = json!({
        "title": "Cold food",
        "description": "Dinner was served cold.",
        "imageUrl": "https://example.com/photo.jpg",
    });
    let response = post_json_auth(&app, "/api/student/complaints", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["status"], "Pending");
    assert_eq!(created["data"]["studentId"], "s1");
    assert_eq!(created["data"]["imageUrl"], "https://example.com/photo.jpg");

    let json = body_json(get_auth(&app, "/api/student/complaints", &token).await).await;
    let listed = ids(&json);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], created["data"]["id"].as_str().unwrap());
    assert_eq!(listed[1], "c1");
}

#[tokio::test]
async fn complaint_from_deleted_student_is_not_found() {
    let app = common::build_test_app().await;
    let before = app.repos.complaints.count().await.unwrap();

    let body = json!({ "title": "Cold food", "description": "Dinner was served cold." });
    let response =
        post_json_auth(&app, "/api/student/complaints", &student_token("gone"), body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.repos.complaints.count().await.unwrap(), before);
}

// ---------------------------------------------------------------------------
// Suggestions and broadcasts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestions_are_listed_newest_first() {
    let app = common::build_test_app().await;
    let token = student_token("s3");

    let json = body_json(get_auth(&app, "/api/student/suggestions", &token).await).await;
    assert_eq!(ids(&json), vec!["sug2", "sug1"]);

    let body = json!({ "text": "More fruit at breakfast." });
    let response = post_json_auth(&app, "/api/student/suggestions", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["studentName"], "Amit Singh");

    let json = body_json(get_auth(&app, "/api/student/suggestions", &token).await).await;
    let listed = ids(&json);
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0], created["data"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn blank_suggestion_is_rejected() {
    let app = common::build_test_app().await;

    let body = json!({ "text": "" });
    let response =
        post_json_auth(&app, "/api/student/suggestions", &student_token("s1"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn broadcast_feed_starts_empty() {
    let app = common::build_test_app().await;

    let json = body_json(get_auth(&app, "/api/student/broadcasts", &student_token("s1")).await).await;

    assert_eq!(json["success"], true);
    assert!(json["data"].as_array().unwrap().is_empty());
}
