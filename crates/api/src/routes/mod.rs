pub mod admin;
pub mod auth;
pub mod health;
pub mod manager;
pub mod student;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{guest, settings};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/student/login                  student login (public)
/// /auth/login                          staff login (public)
/// /auth/me                             token introspection (any role)
///
/// /student/register                    registration request (public)
/// /student/...                         student portal (student role)
///
/// /manager/...                         manager portal (manager or admin)
///
/// /admin/complaints                    complaint oversight (admin)
///
/// /guest/pay                           guest payment (public)
/// /settings                            fee and rules (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/student", student::router())
        .nest("/manager", manager::router())
        .nest("/admin", admin::router())
        .route("/guest/pay", post(guest::pay))
        .route("/settings", get(settings::get_public))
}
