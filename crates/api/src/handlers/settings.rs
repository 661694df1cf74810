//! Handlers for mess settings (monthly fee and rules).

use axum::extract::State;
use axum::Json;
use dineflow_core::validation::validate_amount;
use dineflow_db::models::settings::MessSettings;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::rbac::RequireStaff;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/settings
///
/// Public view of the fee and rules.
pub async fn get_public(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MessSettings>>> {
    let settings = state.repos.settings.load().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// GET /api/manager/settings
pub async fn get_for_staff(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<ApiResponse<MessSettings>>> {
    let settings = state.repos.settings.load().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// PUT /api/manager/settings
///
/// Replace the settings. Blank rules are dropped.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    ApiJson(input): ApiJson<MessSettings>,
) -> AppResult<Json<ApiResponse<MessSettings>>> {
    validate_amount("monthlyAmount", input.monthly_amount)?;

    let settings = state.repos.settings.save(input.normalized()).await?;

    tracing::info!(
        monthly_amount = settings.monthly_amount,
        rules = settings.rules.len(),
        updated_by = %user.role,
        "Settings updated",
    );

    Ok(Json(ApiResponse::ok(settings)))
}
