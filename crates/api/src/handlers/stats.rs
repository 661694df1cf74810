//! Manager dashboard counters.

use axum::extract::State;
use axum::Json;
use dineflow_core::error::CoreError;
use dineflow_core::types::Amount;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStats {
    pub total_students: usize,
    pub pending_requests: usize,
    /// Monthly fee times the number of students.
    pub monthly_revenue: Amount,
    /// Complaints not yet resolved.
    pub active_complaints: usize,
}

/// Monthly fee times the number of students, or an internal error when the
/// product does not fit in an [`Amount`].
fn monthly_revenue(monthly_amount: Amount, students: usize) -> Result<Amount, CoreError> {
    Amount::try_from(students)
        .ok()
        .and_then(|count| monthly_amount.checked_mul(count))
        .ok_or_else(|| {
            CoreError::Internal(format!(
                "Monthly revenue overflows for fee {monthly_amount} and {students} students"
            ))
        })
}

/// GET /api/manager/stats
pub async fn dashboard(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<ApiResponse<ManagerStats>>> {
    let total_students = state.repos.students.count().await?;
    let pending_requests = state.repos.student_requests.count().await?;
    let settings = state.repos.settings.load().await?;
    let active_complaints = state
        .repos
        .complaints
        .list_all()
        .await?
        .iter()
        .filter(|c| c.status.is_active())
        .count();

    let monthly_revenue = monthly_revenue(settings.monthly_amount, total_students)?;

    Ok(Json(ApiResponse::ok(ManagerStats {
        total_students,
        pending_requests,
        monthly_revenue,
        active_complaints,
    })))
}
