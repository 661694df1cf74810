//! Manager billing handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use dineflow_core::error::CoreError;
use dineflow_core::status::BillStatus;
use dineflow_db::models::bill::{Bill, BillingOverview};
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/manager/billing-overview
///
/// Bills bucketed into unpaid / paid / overdue, each joined with its student.
pub async fn overview(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<ApiResponse<BillingOverview>>> {
    let bills = state.repos.bills.list_all().await?;
    let students = state.repos.students.list_all().await?;
    Ok(Json(ApiResponse::ok(BillingOverview::build(bills, &students))))
}

/// POST /api/manager/bills/{id}/pay
///
/// Record a cash payment against a due or overdue bill.
pub async fn mark_paid(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Bill>>> {
    let bill = state
        .repos
        .bills
        .find(&id)
        .await?
        .ok_or_else(|| CoreError::not_found("Bill", &id))?;
    bill.status.ensure_payable()?;

    let bill = state
        .repos
        .bills
        .patch(
            &id,
            json!({ "status": BillStatus::Paid, "paidDate": Utc::now() }),
        )
        .await?
        .ok_or_else(|| CoreError::not_found("Bill", &id))?;

    tracing::info!(bill_id = %id, amount = bill.amount, recorded_by = %user.role, "Bill marked paid");

    Ok(Json(ApiResponse::ok(bill)))
}
