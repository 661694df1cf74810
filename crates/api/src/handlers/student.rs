//! Student portal handlers: registration, dashboard summary and own bills.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dineflow_core::error::CoreError;
use dineflow_core::menu::{DayOfWeek, MenuItem};
use dineflow_core::paging::page_after;
use dineflow_core::password::{hash_password, validate_password_strength};
use dineflow_core::status::RequestStatus;
use dineflow_core::types::{Amount, Timestamp};
use dineflow_core::validation::{require_fields, validate_email, validate_phone};
use dineflow_db::models::bill::Bill;
use dineflow_db::models::complaint::ComplaintSummary;
use dineflow_db::models::student::{
    RegisterStudent, StudentProfile, StudentRequest, StudentRequestView,
};
use dineflow_db::repositories::new_id;
use serde::Serialize;

use super::newest_first;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::RequireStudent;
use crate::query::ListParams;
use crate::response::{ApiResponse, Listed};
use crate::state::AppState;

/// Number of complaints shown on the dashboard.
const RECENT_COMPLAINTS: usize = 3;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Total owed across a student's unpaid and overdue bills.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDue {
    pub amount: Amount,
    /// Earliest due date among the outstanding bills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
}

impl CurrentDue {
    fn from_bills(bills: &[Bill]) -> Result<Self, CoreError> {
        let outstanding = bills.iter().filter(|b| b.status.is_outstanding());
        let amount = outstanding
            .clone()
            .try_fold(0, |total: Amount, b| total.checked_add(b.amount))
            .ok_or_else(|| CoreError::Internal("Outstanding bill total overflows".into()))?;
        Ok(Self {
            amount,
            due_date: outstanding.map(|b| b.due_date).min(),
        })
    }
}

/// Student dashboard payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub student: StudentProfile,
    pub current_due: CurrentDue,
    pub today: DayOfWeek,
    pub todays_menu: MenuItem,
    pub recent_complaints: Vec<ComplaintSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/student/register
///
/// Submit a registration request. The account becomes usable once a manager
/// approves it.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterStudent>,
) -> AppResult<(StatusCode, Json<ApiResponse<StudentRequestView>>)> {
    require_fields(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
        ("phone", input.phone.as_deref()),
        ("roomNumber", input.room_number.as_deref()),
        ("password", input.password.as_deref()),
    ])?;
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();
    let email = field(&input.email);
    let phone = field(&input.phone);
    let password = input.password.as_deref().unwrap_or_default();

    validate_email(&email)?;
    validate_phone(&phone)?;
    validate_password_strength(password)?;

    if state.repos.email_in_use(&email).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "An account or pending registration already uses {email}"
        ))));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let request = StudentRequest {
        id: new_id(),
        name: field(&input.name),
        email,
        phone,
        room_number: field(&input.room_number),
        password_hash,
        status: RequestStatus::Pending,
        submitted_date: Utc::now(),
    };
    let request = state.repos.student_requests.create(request).await?;

    tracing::info!(request_id = %request.id, "Student registration submitted");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(StudentRequestView::from(&request))),
    ))
}

/// GET /api/student/summary
pub async fn summary(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
) -> AppResult<Json<ApiResponse<StudentSummary>>> {
    let student = state
        .repos
        .students
        .find(&user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Student", &user.user_id))?;

    let bills = state.repos.bills_for_student(&student.id).await?;

    let today = DayOfWeek::of(Utc::now());
    let menu = state.repos.menu.load().await?;

    let complaints = state.repos.complaints_for_student(&student.id).await?;
    let recent_complaints = newest_first(complaints, |c| c.submitted_date)
        .iter()
        .take(RECENT_COMPLAINTS)
        .map(ComplaintSummary::from)
        .collect();

    Ok(Json(ApiResponse::ok(StudentSummary {
        student: StudentProfile::from(&student),
        current_due: CurrentDue::from_bills(&bills)?,
        today,
        todays_menu: menu.day(today).clone(),
        recent_complaints,
    })))
}

/// GET /api/student/billing
///
/// The caller's bills in storage order.
pub async fn my_bills(
    State(state): State<AppState>,
    RequireStudent(user): RequireStudent,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Listed<Bill>> {
    let bills = state.repos.bills_for_student(&user.user_id).await?;
    let page = page_after(bills, params.cursor(), params.limit(), |b| b.id.as_str())?;
    Ok(Listed(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dineflow_core::status::BillStatus;

    fn bill(id: &str, amount: Amount, status: BillStatus, due_day: u32) -> Bill {
        Bill {
            id: id.into(),
            student_id: "s1".into(),
            month: "August 2025".into(),
            amount,
            status,
            due_date: Utc.with_ymd_and_hms(2025, 9, due_day, 0, 0, 0).unwrap(),
            paid_date: None,
        }
    }

    #[test]
    fn current_due_sums_outstanding_bills() {
        let bills = vec![
            bill("b1", 3500, BillStatus::Due, 5),
            bill("b2", 3500, BillStatus::Paid, 1),
            bill("b3", 1200, BillStatus::Overdue, 3),
        ];
        let due = CurrentDue::from_bills(&bills).unwrap();
        assert_eq!(due.amount, 4700);
        assert_eq!(
            due.due_date,
            Some(Utc.with_ymd_and_hms(2025, 9, 3, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn nothing_owed_when_all_paid() {
        let due = CurrentDue::from_bills(&[bill("b1", 3500, BillStatus::Paid, 5)]).unwrap();
        assert_eq!(due.amount, 0);
        assert_eq!(due.due_date, None);
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let bills = vec![
            bill("b1", Amount::MAX, BillStatus::Due, 5),
            bill("b2", 1, BillStatus::Overdue, 3),
        ];
        assert!(matches!(
            CurrentDue::from_bills(&bills),
            Err(CoreError::Internal(_))
        ));
    }
}
