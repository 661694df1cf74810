//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /student/login  -> student_login
/// POST /login          -> staff_login
/// GET  /me             -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/student/login", post(auth::student_login))
        .route("/login", post(auth::staff_login))
        .route("/me", get(auth::me))
}
