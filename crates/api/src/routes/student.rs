//! Route definitions for the student portal.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{broadcasts, complaints, menu, student, suggestions};
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// ```text
/// POST /register       -> register (public)
/// GET  /summary        -> summary
/// GET  /menu           -> get_menu (any role)
/// GET  /billing        -> my_bills
/// GET  /complaints     -> list_own
/// POST /complaints     -> create
/// GET  /suggestions    -> list_for_student
/// POST /suggestions    -> create
/// GET  /broadcasts     -> feed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(student::register))
        .route("/summary", get(student::summary))
        .route("/menu", get(menu::get_menu))
        .route("/billing", get(student::my_bills))
        .route(
            "/complaints",
            get(complaints::list_own).post(complaints::create),
        )
        .route(
            "/suggestions",
            get(suggestions::list_for_student).post(suggestions::create),
        )
        .route("/broadcasts", get(broadcasts::feed))
}
