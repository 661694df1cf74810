//! Entity store for the DineFlow backend.
//!
//! Records are plain serde documents addressed by a string id. The
//! [`store::Repository`] trait abstracts over the backend (in-memory or
//! PostgreSQL); [`Repositories`] bundles one repository per entity and is
//! what the HTTP layer receives as injected state.

use sqlx::postgres::PgPoolOptions;

pub mod entity;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use entity::{Entity, SingletonEntity};
pub use error::StoreError;
pub use repositories::Repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
