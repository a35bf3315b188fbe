//! sqlx-backed file-system item repository.

use async_trait::async_trait;
use sqlx::PgPool;

use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_core::traits::PathStore;
use folderhub_entity::item::{CreateItem, FileSystemItem};

/// PostgreSQL [`PathStore`] implementation over the `file_system_items`
/// table.
///
/// The table's unique constraint on `full_path` is the final arbiter of
/// path uniqueness: the service's existence pre-checks are not atomic with
/// the write, so a concurrent duplicate insert reaches the constraint and
/// is translated back into an already-exists conflict here.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PathStore<FileSystemItem, CreateItem> for ItemRepository {
    async fn find_by_path(&self, path: &str) -> AppResult<Option<FileSystemItem>> {
        sqlx::query_as::<_, FileSystemItem>(
            "SELECT * FROM file_system_items WHERE full_path = $1",
        )
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find item by path", e)
        })
    }

    async fn find_by_prefix(&self, prefix: &str) -> AppResult<Vec<FileSystemItem>> {
        if prefix.is_empty() {
            sqlx::query_as::<_, FileSystemItem>(
                "SELECT * FROM file_system_items ORDER BY full_path ASC",
            )
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, FileSystemItem>(
                "SELECT * FROM file_system_items WHERE starts_with(full_path, $1) \
                 ORDER BY full_path ASC",
            )
            .bind(prefix)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list items by prefix", e)
        })
    }

    async fn insert(&self, item: &CreateItem) -> AppResult<FileSystemItem> {
        sqlx::query_as::<_, FileSystemItem>(
            "INSERT INTO file_system_items \
             (parent_id, name, full_path, kind, file_content, file_type) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(item.parent_id)
        .bind(&item.name)
        .bind(&item.full_path)
        .bind(item.kind)
        .bind(&item.file_content)
        .bind(&item.file_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("file_system_items_full_path_key") =>
            {
                AppError::already_exists(&item.name)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert item", e),
        })
    }

    async fn update(&self, item: &FileSystemItem) -> AppResult<FileSystemItem> {
        sqlx::query_as::<_, FileSystemItem>(
            "UPDATE file_system_items \
             SET parent_id = $2, name = $3, full_path = $4, \
                 file_content = $5, file_type = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(item.parent_id)
        .bind(&item.name)
        .bind(&item.full_path)
        .bind(&item.file_content)
        .bind(&item.file_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("file_system_items_full_path_key") =>
            {
                AppError::already_exists(&item.full_path)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update item", e),
        })?
        .ok_or_else(|| AppError::not_found(&item.full_path))
    }

    async fn delete(&self, item: &FileSystemItem) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM file_system_items WHERE id = $1")
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete item", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
