//! Storage traits and their backends.
//!
//! - [`Repository`] -- keyed CRUD + cursor listing for an [`Entity`].
//! - [`SingletonStore`] -- load/save of a [`SingletonEntity`].
//! - [`memory`] -- process-local backend (default, used by tests).
//! - [`postgres`] -- JSONB documents in PostgreSQL.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use dineflow_core::paging::Page;

use crate::entity::{Entity, SingletonEntity};
use crate::error::StoreError;

pub use memory::{MemoryRepository, MemorySingleton};
pub use postgres::{PgRepository, PgSingleton};

/// Generic persistence for one record type, keyed by id.
///
/// Listing follows insertion order. Re-creating an existing id overwrites the
/// record in place without moving it.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Fetch a record, `None` if the id is absent.
    async fn find(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Fetch a record, falling back to the type's initial state.
    async fn get(&self, id: &str) -> Result<T, StoreError> {
        Ok(self.find(id).await?.unwrap_or_default())
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.find(id).await?.is_some())
    }

    /// List records after `cursor` (the last id already seen), at most
    /// `limit` of them. `None` limit returns every remaining record.
    async fn list(&self, cursor: Option<&str>, limit: Option<usize>)
        -> Result<Page<T>, StoreError>;

    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.list(None, None).await?.items)
    }

    async fn count(&self) -> Result<usize, StoreError>;

    /// Store `record` under its id, overwriting any existing record.
    async fn create(&self, record: T) -> Result<T, StoreError>;

    /// Shallow-merge `patch` into the stored record. Returns the merged
    /// record, or `None` if the id is absent.
    async fn patch(&self, id: &str, patch: serde_json::Value) -> Result<Option<T>, StoreError>;

    /// Remove a record. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Insert [`Entity::seed_data`] once, only if the store is empty.
    /// Returns the number of records inserted.
    async fn ensure_seed(&self) -> Result<usize, StoreError>;
}

/// Storage for a record type with exactly one value.
#[async_trait]
pub trait SingletonStore<T: SingletonEntity>: Send + Sync {
    /// The stored value, or the type's initial state if none was saved.
    async fn load(&self) -> Result<T, StoreError>;

    async fn save(&self, value: T) -> Result<T, StoreError>;

    /// Store [`SingletonEntity::seed_data`] if nothing is stored yet.
    /// Returns whether a value was written.
    async fn ensure_seed(&self) -> Result<bool, StoreError>;
}
