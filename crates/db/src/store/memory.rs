//! In-memory backend.
//!
//! Each repository owns an insertion-ordered map behind a `tokio` RwLock.
//! Writers to the same record race with last-write-wins semantics.

use async_trait::async_trait;
use dineflow_core::paging::{Page, UnknownCursor};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{Repository, SingletonStore};
use crate::entity::{merge_patch, Entity, SingletonEntity};
use crate::error::StoreError;

struct MemoryTable<T> {
    records: IndexMap<String, T>,
    seeded: bool,
}

/// Process-local [`Repository`] for one entity type.
pub struct MemoryRepository<T> {
    table: RwLock<MemoryTable<T>>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                records: IndexMap::new(),
                seeded: false,
            }),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.table.read().await.records.get(id).cloned())
    }

    async fn list(
        &self,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Page<T>, StoreError> {
        let table = self.table.read().await;
        let total = table.records.len();

        let start = match cursor {
            Some(cursor) => {
                table
                    .records
                    .get_index_of(cursor)
                    .ok_or_else(|| UnknownCursor(cursor.to_string()))?
                    + 1
            }
            None => 0,
        };
        let end = limit.map_or(total, |limit| (start + limit).min(total));

        let items: Vec<T> = (start..end)
            .filter_map(|i| table.records.get_index(i).map(|(_, r)| r.clone()))
            .collect();

        let next = if end < total {
            items.last().map(|r| r.id().to_string())
        } else {
            None
        };

        Ok(Page { items, next })
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.read().await.records.len())
    }

    async fn create(&self, record: T) -> Result<T, StoreError> {
        let mut table = self.table.write().await;
        table.records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn patch(&self, id: &str, patch: serde_json::Value) -> Result<Option<T>, StoreError> {
        let mut table = self.table.write().await;
        let Some(current) = table.records.get_mut(id) else {
            return Ok(None);
        };
        let merged = merge_patch(current, &patch)?;
        *current = merged.clone();
        Ok(Some(merged))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.table.write().await.records.shift_remove(id).is_some())
    }

    async fn ensure_seed(&self) -> Result<usize, StoreError> {
        let mut table = self.table.write().await;
        if table.seeded {
            return Ok(0);
        }
        table.seeded = true;
        if !table.records.is_empty() {
            return Ok(0);
        }

        let seed = T::seed_data();
        let inserted = seed.len();
        for record in seed {
            table.records.insert(record.id().to_string(), record);
        }
        tracing::debug!(entity = T::NAME, inserted, "Seeded in-memory store");
        Ok(inserted)
    }
}

/// Process-local [`SingletonStore`].
pub struct MemorySingleton<T> {
    value: RwLock<Option<T>>,
}

impl<T> MemorySingleton<T> {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }
}

impl<T> Default for MemorySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: SingletonEntity> SingletonStore<T> for MemorySingleton<T> {
    async fn load(&self) -> Result<T, StoreError> {
        Ok(self.value.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, value: T) -> Result<T, StoreError> {
        *self.value.write().await = Some(value.clone());
        Ok(value)
    }

    async fn ensure_seed(&self) -> Result<bool, StoreError> {
        let mut slot = self.value.write().await;
        if slot.is_some() {
            return Ok(false);
        }
        match T::seed_data() {
            Some(seed) => {
                *slot = Some(seed);
                tracing::debug!(entity = T::NAME, "Seeded in-memory singleton");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
