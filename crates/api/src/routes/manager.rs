//! Route definitions for the manager portal. Admins may use every route.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    billing, broadcasts, complaints, guest, menu, settings, stats, students, suggestions,
};
use crate::state::AppState;

/// Routes mounted at `/manager`.
///
/// ```text
/// GET      /stats                        -> dashboard
/// GET, PUT /menu                         -> get_for_staff, update_menu
/// GET      /complaints                   -> list_all
/// POST     /complaints/{id}/reply        -> reply
/// GET      /suggestions                  -> list_for_staff
/// GET      /students                     -> list_students
/// PUT      /students/{id}                -> update_student
/// GET      /student-requests             -> list_requests
/// POST     /student-requests/{id}        -> decide_request
/// GET      /billing-overview             -> overview
/// POST     /bills/{id}/pay               -> mark_paid
/// GET      /broadcasts                   -> history
/// POST     /broadcast                    -> send
/// GET      /guest-payments               -> list
/// GET, PUT /settings                     -> get_for_staff, update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::dashboard))
        .route("/menu", get(menu::get_for_staff).put(menu::update_menu))
        .route("/complaints", get(complaints::list_all))
        .route("/complaints/{id}/reply", post(complaints::reply))
        .route("/suggestions", get(suggestions::list_for_staff))
        .route("/students", get(students::list_students))
        .route("/students/{id}", put(students::update_student))
        .route("/student-requests", get(students::list_requests))
        .route("/student-requests/{id}", post(students::decide_request))
        .route("/billing-overview", get(billing::overview))
        .route("/bills/{id}/pay", post(billing::mark_paid))
        .route("/broadcasts", get(broadcasts::history))
        .route("/broadcast", post(broadcasts::send))
        .route("/guest-payments", get(guest::list))
        .route(
            "/settings",
            get(settings::get_for_staff).put(settings::update),
        )
}
