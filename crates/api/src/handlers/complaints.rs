//! Handlers for complaints: student submission, manager replies and admin
//! oversight.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dineflow_core::error::CoreError;
use dineflow_core::paging::page_after;
use dineflow_core::status::ComplaintStatus;
use dineflow_core::validation::{non_blank, require_fields};
use dineflow_db::models::complaint::{Complaint, CreateComplaint, ReplyToComplaint};
use dineflow_db::repositories::new_id;
use serde::Serialize;
use serde_json::json;

use super::newest_first;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireAdmin, RequireStaff, RequireStudent};
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

/// A complaint with its author's name, for admin oversight.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintOverview {
    #[serde(flatten)]
    pub complaint: Complaint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

fn page_newest(complaints: Vec<Complaint>, params: &ListParams) -> AppResult<Listed<Complaint>> {
    let sorted = newest_first(complaints, |c| c.submitted_date);
    let page = page_after(sorted, params.cursor(), params.limit(), |c| c.id.as_str())?;
    Ok(Listed(page))
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// GET /api/student/complaints
///
/// The caller's complaints, newest first.
pub async fn list_own(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Complaint>> {
    let complaints = state.repos.complaints_for_student(&user.user_id).await?;
    page_newest(complaints, &params)
}

/// POST /api/student/complaints
pub async fn create(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    ApiJson(input): ApiJson<CreateComplaint>,
) -> AppResult<(StatusCode, Json<ApiResponse<Complaint>>)> {
    require_fields(&[
        ("title", input.title.as_deref()),
        ("description", input.description.as_deref()),
    ])?;

    let student = state
        .repos
        .students
        .find(&user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", &user.user_id))?;

    let complaint = Complaint {
        id: new_id(),
        student_id: Some(student.id),
        title: input.title.as_deref().unwrap_or_default().trim().to_string(),
        description: input
            .description
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        image_url: non_blank(input.image_url.as_deref()).map(str::to_string),
        status: ComplaintStatus::Pending,
        submitted_date: Utc::now(),
        resolved_date: None,
        manager_reply: None,
    };
    let complaint = state.repos.complaints.create(complaint).await?;

    tracing::info!(complaint_id = %complaint.id, "Complaint submitted");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(complaint))))
}

// ---------------------------------------------------------------------------
// Manager
// ---------------------------------------------------------------------------

/// GET /api/manager/complaints
///
/// Every complaint, newest first.
pub async fn list_all(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Complaint>> {
    let complaints = state.repos.complaints.list_all().await?;
    page_newest(complaints, &params)
}

/// POST /api/manager/complaints/{id}/reply
///
/// Store the reply verbatim and move the complaint to "In Progress".
pub async fn reply(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ReplyToComplaint>,
) -> AppResult<Json<ApiResponse<Complaint>>> {
    require_fields(&[("reply", input.reply.as_deref())])?;
    let reply = input.reply.unwrap_or_default();

    let complaint = state
        .repos
        .complaints
        .find(&id)
        .await?
        .ok_or_else(|| CoreError::not_found("Complaint", &id))?;
    let status = complaint.status.after_reply()?;

    let updated = state
        .repos
        .complaints
        .patch(&id, json!({ "status": status, "managerReply": reply }))
        .await?
        .ok_or_else(|| CoreError::not_found("Complaint", &id))?;

    tracing::info!(complaint_id = %id, replied_by = %user.role, "Complaint replied");

    Ok(Json(ApiResponse::ok(updated)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/complaints
///
/// Every complaint newest first, with the author's name attached.
pub async fn oversight(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<ComplaintOverview>> {
    let Listed(page) = page_newest(state.repos.complaints.list_all().await?, &params)?;

    let students = state.repos.students.list_all().await?;
    let names: HashMap<&str, &str> = students
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    Ok(Listed(page.map(|complaint| {
        let student_name = complaint
            .student_id
            .as_deref()
            .and_then(|id| names.get(id))
            .map(|name| name.to_string());
        ComplaintOverview {
            complaint,
            student_name,
        }
    })))
}
