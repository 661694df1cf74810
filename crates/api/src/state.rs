use std::sync::Arc;

use dineflow_db::Repositories;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the repositories are `Arc`s and the config is shared.
#[derive(Clone)]
pub struct AppState {
    /// Entity stores (in-memory or PostgreSQL).
    pub repos: Repositories,
    /// Server configuration (JWT settings, staff accounts).
    pub config: Arc<ServerConfig>,
}
