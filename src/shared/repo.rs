//! Generic lifecycle repository shared by every entity service.
//!
//! One component parameterized by entity metadata replaces the per-entity
//! copies of list/get/publish/feature/soft-delete. Entity-specific
//! create/update SQL stays in the feature services; uniqueness is enforced by
//! partial unique indexes at the storage layer and translated to Conflict in
//! [`crate::core::error`].

use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::shared::listing::ListOptions;
use crate::shared::types::ListQuery;

/// Metadata an entity provides to the shared repository.
///
/// Every managed table carries the common lifecycle columns: `id` (surrogate,
/// internal only), `public_id`, `status`, `created_at`, `updated_at` and
/// `deleted_at`.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Human label used in error messages ("Article", "Discount", ...).
    const LABEL: &'static str;

    /// Explicit column list for SELECT and RETURNING clauses.
    const COLUMNS: &'static str;

    /// Columns matched by the free-text search filter. Must be non-empty.
    const SEARCH_COLUMNS: &'static [&'static str];
}

/// Marker for entities carrying `is_published` and `published_at`.
pub trait Publishable: Resource {}

/// Marker for entities carrying `is_featured`.
pub trait Featurable: Resource {}

/// Shared storage operations over one entity table.
pub struct LifecycleRepo<E> {
    pool: PgPool,
    _entity: PhantomData<E>,
}

impl<E: Resource> LifecycleRepo<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Pool handle for entity-specific queries in feature services.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List active rows: total count (ignoring pagination) plus one page.
    pub async fn list(&self, query: &ListQuery) -> Result<(i64, Vec<E>)> {
        let options = ListOptions::new(E::SEARCH_COLUMNS, query);

        let mut count = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
        options.push_where(&mut count);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        let mut page = QueryBuilder::new(format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE));
        options.push_where(&mut page);
        options.push_page(&mut page);
        let rows = page
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        Ok((total, rows))
    }

    /// Fetch one active row by public id.
    pub async fn get(&self, id: Uuid) -> Result<E> {
        let sql = format!(
            "SELECT {} FROM {} WHERE public_id = $1 AND status = TRUE",
            E::COLUMNS,
            E::TABLE
        );
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {} by id: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        row.ok_or_else(|| Self::not_found(id))
    }

    /// Soft delete: mark the row inactive and stamp `deleted_at`.
    ///
    /// Terminal state. A second delete on the same id fails NotFound because
    /// lookups require active status.
    pub async fn soft_delete(&self, id: Uuid) -> Result<E> {
        let sql = format!(
            "UPDATE {} SET status = FALSE, deleted_at = NOW(), updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE RETURNING {}",
            E::TABLE,
            E::COLUMNS
        );
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to soft delete from {}: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        row.ok_or_else(|| Self::not_found(id))
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("{} '{}' not found", E::LABEL, id))
    }
}

impl<E: Publishable> LifecycleRepo<E> {
    /// Set the publication flag and stamp `published_at`.
    pub async fn set_published(&self, id: Uuid, published: bool) -> Result<E> {
        let sql = format!(
            "UPDATE {} SET is_published = $2, published_at = NOW(), updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE RETURNING {}",
            E::TABLE,
            E::COLUMNS
        );
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .bind(published)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set publication on {}: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        row.ok_or_else(|| Self::not_found(id))
    }
}

impl<E: Featurable> LifecycleRepo<E> {
    /// Set the featured flag. Idempotent: a second call is a no-op update.
    pub async fn set_featured(&self, id: Uuid) -> Result<E> {
        let sql = format!(
            "UPDATE {} SET is_featured = TRUE, updated_at = NOW() \
             WHERE public_id = $1 AND status = TRUE RETURNING {}",
            E::TABLE,
            E::COLUMNS
        );
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set featured on {}: {:?}", E::TABLE, e);
                AppError::Database(e)
            })?;

        row.ok_or_else(|| Self::not_found(id))
    }
}
