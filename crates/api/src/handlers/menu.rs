//! Handlers for the weekly menu.

use axum::extract::State;
use axum::Json;
use dineflow_db::models::menu::WeeklyMenu;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/student/menu
///
/// Any signed-in user may read the menu.
pub async fn get_menu(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<WeeklyMenu>>> {
    let menu = state.repos.menu.load().await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// GET /api/manager/menu
pub async fn get_for_staff(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<ApiResponse<WeeklyMenu>>> {
    let menu = state.repos.menu.load().await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// PUT /api/manager/menu
///
/// Replace the whole week. Days missing from the body become empty.
pub async fn update_menu(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    ApiJson(input): ApiJson<WeeklyMenu>,
) -> AppResult<Json<ApiResponse<WeeklyMenu>>> {
    let menu = state.repos.menu.save(input.normalized()).await?;

    tracing::info!(updated_by = %user.role, "Weekly menu updated");

    Ok(Json(ApiResponse::ok(menu)))
}
