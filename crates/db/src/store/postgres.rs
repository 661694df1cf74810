//! PostgreSQL backend.
//!
//! Every entity kind shares the `entity_records` table: one JSONB document per
//! `(kind, id)`, ordered by a `seq` assigned on first insert. Seeded kinds are
//! recorded in `entity_seeds`; singletons live in `singleton_records`.

use std::marker::PhantomData;

use async_trait::async_trait;
use dineflow_core::paging::{Page, UnknownCursor};

use super::{Repository, SingletonStore};
use crate::entity::{merge_patch, Entity, SingletonEntity};
use crate::error::StoreError;
use crate::DbPool;

/// [`Repository`] over the `entity_records` table, scoped to `T::NAME`.
pub struct PgRepository<T> {
    pool: DbPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(data: serde_json::Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(data)?)
}

#[async_trait]
impl<T: Entity> Repository<T> for PgRepository<T> {
    async fn find(&self, id: &str) -> Result<Option<T>, StoreError> {
        let data = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT data FROM entity_records WHERE kind = $1 AND id = $2",
        )
        .bind(T::NAME)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        data.map(decode::<T>).transpose()
    }

    async fn list(
        &self,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Page<T>, StoreError> {
        let after_seq: i64 = match cursor {
            Some(cursor) => sqlx::query_scalar::<_, i64>(
                "SELECT seq FROM entity_records WHERE kind = $1 AND id = $2",
            )
            .bind(T::NAME)
            .bind(cursor)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| UnknownCursor(cursor.to_string()))?,
            None => 0,
        };

        // Fetch one extra row to learn whether another page exists.
        let fetch_limit = limit.map(|l| l as i64 + 1);
        let rows = sqlx::query_as::<_, (String, serde_json::Value)>(
            "SELECT id, data FROM entity_records \
             WHERE kind = $1 AND seq > $2 \
             ORDER BY seq \
             LIMIT $3",
        )
        .bind(T::NAME)
        .bind(after_seq)
        .bind(fetch_limit)
        .fetch_all(&self.pool)
        .await?;

        let has_more = limit.is_some_and(|l| rows.len() > l);
        let keep = limit.unwrap_or(rows.len()).min(rows.len());

        let mut items = Vec::with_capacity(keep);
        let mut last_id = None;
        for (id, data) in rows.into_iter().take(keep) {
            items.push(decode(data)?);
            last_id = Some(id);
        }

        Ok(Page {
            items,
            next: if has_more { last_id } else { None },
        })
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM entity_records WHERE kind = $1",
        )
        .bind(T::NAME)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.max(0) as usize)
    }

    async fn create(&self, record: T) -> Result<T, StoreError> {
        let data = serde_json::to_value(&record)?;
        sqlx::query(
            "INSERT INTO entity_records (kind, id, data) VALUES ($1, $2, $3) \
             ON CONFLICT (kind, id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()",
        )
        .bind(T::NAME)
        .bind(record.id())
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn patch(&self, id: &str, patch: serde_json::Value) -> Result<Option<T>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT data FROM entity_records WHERE kind = $1 AND id = $2 FOR UPDATE",
        )
        .bind(T::NAME)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };
        let merged = merge_patch(&decode::<T>(current)?, &patch)?;

        sqlx::query(
            "UPDATE entity_records SET data = $3, updated_at = NOW() \
             WHERE kind = $1 AND id = $2",
        )
        .bind(T::NAME)
        .bind(id)
        .bind(serde_json::to_value(&merged)?)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(merged))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM entity_records WHERE kind = $1 AND id = $2")
            .bind(T::NAME)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ensure_seed(&self) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            "INSERT INTO entity_seeds (kind) VALUES ($1) ON CONFLICT (kind) DO NOTHING",
        )
        .bind(T::NAME)
        .execute(&mut *tx)
        .await?
        .rows_affected();
        if claimed == 0 {
            return Ok(0);
        }

        let has_records = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM entity_records WHERE kind = $1)",
        )
        .bind(T::NAME)
        .fetch_one(&mut *tx)
        .await?;

        let mut inserted = 0;
        if !has_records {
            for record in T::seed_data() {
                inserted += sqlx::query(
                    "INSERT INTO entity_records (kind, id, data) VALUES ($1, $2, $3) \
                     ON CONFLICT (kind, id) DO NOTHING",
                )
                .bind(T::NAME)
                .bind(record.id())
                .bind(serde_json::to_value(&record)?)
                .execute(&mut *tx)
                .await?
                .rows_affected() as usize;
            }
        }

        tx.commit().await?;
        tracing::info!(entity = T::NAME, inserted, "Seeded entity store");
        Ok(inserted)
    }
}

/// [`SingletonStore`] over the `singleton_records` table.
pub struct PgSingleton<T> {
    pool: DbPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgSingleton<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: SingletonEntity> SingletonStore<T> for PgSingleton<T> {
    async fn load(&self) -> Result<T, StoreError> {
        let data = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT data FROM singleton_records WHERE kind = $1",
        )
        .bind(T::NAME)
        .fetch_optional(&self.pool)
        .await?;

        Ok(data.map(decode::<T>).transpose()?.unwrap_or_default())
    }

    async fn save(&self, value: T) -> Result<T, StoreError> {
        sqlx::query(
            "INSERT INTO singleton_records (kind, data) VALUES ($1, $2) \
             ON CONFLICT (kind) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()",
        )
        .bind(T::NAME)
        .bind(serde_json::to_value(&value)?)
        .execute(&self.pool)
        .await?;
        Ok(value)
    }

    async fn ensure_seed(&self) -> Result<bool, StoreError> {
        let Some(seed) = T::seed_data() else {
            return Ok(false);
        };
        let written = sqlx::query(
            "INSERT INTO singleton_records (kind, data) VALUES ($1, $2) \
             ON CONFLICT (kind) DO NOTHING",
        )
        .bind(T::NAME)
        .bind(serde_json::to_value(&seed)?)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if written > 0 {
            tracing::info!(entity = T::NAME, "Seeded singleton store");
        }
        Ok(written > 0)
    }
}
