//! Manager handlers for students and registration requests.

use axum::extract::{Path, State};
use axum::Json;
use dineflow_core::error::CoreError;
use dineflow_core::status::RequestAction;
use dineflow_core::types::RecordId;
use dineflow_core::validation::{non_blank, require_fields, validate_email, validate_phone};
use dineflow_db::models::student::{
    RequestDecision, StudentProfile, StudentRequestView, UpdateStudent,
};
use dineflow_db::repositories::new_id;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::RequireStaff;
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

/// Outcome of approving or rejecting a registration request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    pub action: RequestAction,
    pub request_id: RecordId,
    /// The new student record, present on approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentProfile>,
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// GET /api/manager/students
pub async fn list_students(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<StudentProfile>> {
    let page = state
        .repos
        .students
        .list(params.cursor(), params.limit())
        .await?;
    Ok(Listed(page.map(|s| StudentProfile::from(&s))))
}

/// PUT /api/manager/students/{id}
///
/// Update profile fields. Absent fields are unchanged; present fields must
/// not be blank.
pub async fn update_student(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateStudent>,
) -> AppResult<Json<ApiResponse<StudentProfile>>> {
    let current = state
        .repos
        .students
        .find(&id)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", &id))?;

    let provided = [
        ("name", &input.name),
        ("email", &input.email),
        ("phone", &input.phone),
        ("roomNumber", &input.room_number),
    ];
    let blank: Vec<&str> = provided
        .iter()
        .filter(|(_, value)| value.is_some() && non_blank(value.as_deref()).is_none())
        .map(|(name, _)| *name)
        .collect();
    if !blank.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Field(s) cannot be blank: {}",
            blank.join(", ")
        ))));
    }
    if provided.iter().all(|(_, value)| value.is_none()) {
        return Err(AppError::Core(CoreError::Validation(
            "No fields to update".into(),
        )));
    }

    let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string());
    let update = UpdateStudent {
        name: trimmed(input.name),
        email: trimmed(input.email),
        phone: trimmed(input.phone),
        room_number: trimmed(input.room_number),
    };

    if let Some(email) = update.email.as_deref() {
        validate_email(email)?;
        if !email.eq_ignore_ascii_case(&current.email) && state.repos.email_in_use(email).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "An account or pending registration already uses {email}"
            ))));
        }
    }
    if let Some(phone) = update.phone.as_deref() {
        validate_phone(phone)?;
    }

    let patch = serde_json::to_value(&update)
        .map_err(|e| AppError::InternalError(format!("Failed to encode update: {e}")))?;
    let student = state
        .repos
        .students
        .patch(&id, patch)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", &id))?;

    tracing::info!(student_id = %id, updated_by = %user.role, "Student updated");

    Ok(Json(ApiResponse::ok(StudentProfile::from(&student))))
}

// ---------------------------------------------------------------------------
// Registration requests
// ---------------------------------------------------------------------------

/// GET /api/manager/student-requests
pub async fn list_requests(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<StudentRequestView>> {
    let page = state
        .repos
        .student_requests
        .list(params.cursor(), params.limit())
        .await?;
    Ok(Listed(page.map(|r| StudentRequestView::from(&r))))
}

/// POST /api/manager/student-requests/{id}
///
/// `{ "action": "approve" }` promotes the request to a student;
/// `{ "action": "reject" }` discards it. Either way the request is removed.
/// The two store writes of an approval are independent.
pub async fn decide_request(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<RequestDecision>,
) -> AppResult<Json<ApiResponse<DecisionOutcome>>> {
    require_fields(&[("action", input.action.as_deref())])?;
    let action = RequestAction::parse(input.action.as_deref().unwrap_or_default())?;

    let request = state
        .repos
        .student_requests
        .find(&id)
        .await?
        .ok_or_else(|| CoreError::not_found("StudentRequest", &id))?;

    let student = match action {
        RequestAction::Approve => {
            let student = state
                .repos
                .students
                .create(request.into_student(new_id()))
                .await?;
            Some(StudentProfile::from(&student))
        }
        RequestAction::Reject => None,
    };
    state.repos.student_requests.delete(&id).await?;

    tracing::info!(
        request_id = %id,
        action = ?action,
        student_id = student.as_ref().map(|s| s.id.as_str()),
        decided_by = %user.role,
        "Registration request decided",
    );

    Ok(Json(ApiResponse::ok(DecisionOutcome {
        action,
        request_id: id,
        student,
    })))
}
