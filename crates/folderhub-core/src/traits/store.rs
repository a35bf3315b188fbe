//! Path-indexed store trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Contract for a durable store of path-indexed records.
///
/// The trait is defined with generic type parameters so that the entity and
/// its insert payload stay strongly typed while the store implementation
/// remains swappable (PostgreSQL in production, in-memory in tests). The
/// store owns identifier assignment and is the final arbiter of full-path
/// uniqueness: a duplicate insert must surface as an already-exists
/// conflict even when the caller's pre-check passed.
#[async_trait]
pub trait PathStore<Entity, NewEntity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    NewEntity: Send + Sync + 'static,
{
    /// Find the record whose full path matches `path` exactly.
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Entity>>;

    /// Find all records whose full path starts with `prefix`.
    ///
    /// An empty prefix matches every record in the store.
    async fn find_by_prefix(&self, prefix: &str) -> AppResult<Vec<Entity>>;

    /// Insert a new record, assigning its identifier, and return it.
    async fn insert(&self, item: &NewEntity) -> AppResult<Entity>;

    /// Update an existing record and return the updated version.
    async fn update(&self, item: &Entity) -> AppResult<Entity>;

    /// Delete a record. Returns `true` if a record was deleted.
    async fn delete(&self, item: &Entity) -> AppResult<bool>;
}
