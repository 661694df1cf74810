//! Handlers for guest meal payments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dineflow_core::paging::page_after;
use dineflow_core::validation::{require_fields, validate_amount, validate_phone};
use dineflow_db::models::guest_payment::{CreateGuestPayment, GuestPayment};
use dineflow_db::repositories::new_id;

use super::newest_first;
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::RequireStaff;
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

/// POST /api/guest/pay
///
/// Record a payment from a guest. No account is needed.
pub async fn pay(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGuestPayment>,
) -> AppResult<(StatusCode, Json<ApiResponse<GuestPayment>>)> {
    let amount_text = input.amount.map(|a| a.to_string());
    require_fields(&[
        ("name", input.name.as_deref()),
        ("phone", input.phone.as_deref()),
        ("amount", amount_text.as_deref()),
    ])?;
    let phone = input.phone.as_deref().unwrap_or_default().trim().to_string();
    let amount = input.amount.unwrap_or_default();

    validate_phone(&phone)?;
    validate_amount("amount", amount)?;

    let payment = GuestPayment {
        id: new_id(),
        name: input.name.as_deref().unwrap_or_default().trim().to_string(),
        phone,
        amount,
        payment_date: Utc::now(),
    };
    let payment = state.repos.guest_payments.create(payment).await?;

    tracing::info!(payment_id = %payment.id, amount, "Guest payment recorded");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(payment))))
}

/// GET /api/manager/guest-payments
///
/// Guest payments, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<GuestPayment>> {
    let payments = newest_first(state.repos.guest_payments.list_all().await?, |p| {
        p.payment_date
    });
    let page = page_after(payments, params.cursor(), params.limit(), |p| p.id.as_str())?;
    Ok(Listed(page))
}
