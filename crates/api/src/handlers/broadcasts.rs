//! Handlers for manager broadcasts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dineflow_core::paging::page_after;
use dineflow_core::validation::require_fields;
use dineflow_db::models::broadcast::{Broadcast, CreateBroadcast};
use dineflow_db::repositories::new_id;

use super::newest_first;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireStaff, RequireStudent};
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

async fn newest(state: &AppState, params: &ListParams) -> AppResult<Listed<Broadcast>> {
    let broadcasts = newest_first(state.repos.broadcasts.list_all().await?, |b| b.sent_date);
    let page = page_after(broadcasts, params.cursor(), params.limit(), |b| {
        b.id.as_str()
    })?;
    Ok(Listed(page))
}

/// GET /api/student/broadcasts
pub async fn feed(
    State(state): State<AppState>,
    RequireStudent(_user): RequireStudent,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Broadcast>> {
    newest(&state, &params).await
}

/// GET /api/manager/broadcasts
pub async fn history(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Broadcast>> {
    newest(&state, &params).await
}

/// POST /api/manager/broadcast
pub async fn send(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    ApiJson(input): ApiJson<CreateBroadcast>,
) -> AppResult<(StatusCode, Json<ApiResponse<Broadcast>>)> {
    require_fields(&[("message", input.message.as_deref())])?;

    let broadcast = Broadcast {
        id: new_id(),
        message: input.message.as_deref().unwrap_or_default().trim().to_string(),
        sent_date: Utc::now(),
    };
    let broadcast = state.repos.broadcasts.create(broadcast).await?;

    tracing::info!(broadcast_id = %broadcast.id, sent_by = %user.role, "Broadcast sent");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(broadcast))))
}
