//! Route definitions for the admin portal.

use axum::routing::get;
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /complaints  -> oversight
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/complaints", get(complaints::oversight))
}
