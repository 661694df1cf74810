//! Handlers for the suggestion box.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dineflow_core::error::CoreError;
use dineflow_core::paging::page_after;
use dineflow_core::validation::require_fields;
use dineflow_db::models::suggestion::{CreateSuggestion, Suggestion};
use dineflow_db::repositories::new_id;

use super::newest_first;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireStaff, RequireStudent};
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

async fn newest(state: &AppState, params: &ListParams) -> AppResult<Listed<Suggestion>> {
    let suggestions = newest_first(state.repos.suggestions.list_all().await?, |s| {
        s.submitted_date
    });
    let page = page_after(suggestions, params.cursor(), params.limit(), |s| {
        s.id.as_str()
    })?;
    Ok(Listed(page))
}

/// GET /api/student/suggestions
///
/// The shared suggestion box, newest first.
pub async fn list_for_student(
    State(state): State<AppState>,
    RequireStudent(_user): RequireStudent,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Suggestion>> {
    newest(&state, &params).await
}

/// GET /api/manager/suggestions
pub async fn list_for_staff(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Suggestion>> {
    newest(&state, &params).await
}

/// POST /api/student/suggestions
pub async fn create(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    ApiJson(input): ApiJson<CreateSuggestion>,
) -> AppResult<(StatusCode, Json<ApiResponse<Suggestion>>)> {
    require_fields(&[("text", input.text.as_deref())])?;

    let student = state
        .repos
        .students
        .find(&user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", &user.user_id))?;

    let suggestion = Suggestion {
        id: new_id(),
        student_id: Some(student.id),
        text: input.text.as_deref().unwrap_or_default().trim().to_string(),
        submitted_date: Utc::now(),
        student_name: student.name,
    };
    let suggestion = state.repos.suggestions.create(suggestion).await?;

    tracing::info!(suggestion_id = %suggestion.id, "Suggestion submitted");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(suggestion))))
}
