//! In-memory file-system item store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use folderhub_core::result::AppResult;
use folderhub_core::traits::PathStore;
use folderhub_core::AppError;
use folderhub_entity::item::{CreateItem, FileSystemItem};

/// DashMap-backed [`PathStore`] implementation.
///
/// Observably equivalent to [`ItemRepository`](super::item::ItemRepository):
/// it assigns identifiers on insert and rejects duplicate full paths with an
/// already-exists conflict. Used by the test suites so the service and API
/// layers can be exercised without a running PostgreSQL instance.
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: DashMap<Uuid, FileSystemItem>,
}

impl MemoryItemRepository {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl PathStore<FileSystemItem, CreateItem> for MemoryItemRepository {
    async fn find_by_path(&self, path: &str) -> AppResult<Option<FileSystemItem>> {
        Ok(self
            .items
            .iter()
            .find(|entry| entry.value().full_path == path)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_prefix(&self, prefix: &str) -> AppResult<Vec<FileSystemItem>> {
        let mut matches: Vec<FileSystemItem> = self
            .items
            .iter()
            .filter(|entry| entry.value().full_path.starts_with(prefix))
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.full_path.cmp(&b.full_path));
        Ok(matches)
    }

    async fn insert(&self, item: &CreateItem) -> AppResult<FileSystemItem> {
        if self.find_by_path(&item.full_path).await?.is_some() {
            return Err(AppError::already_exists(&item.name));
        }

        let now = Utc::now();
        let stored = FileSystemItem {
            id: Uuid::new_v4(),
            parent_id: item.parent_id,
            name: item.name.clone(),
            full_path: item.full_path.clone(),
            kind: item.kind,
            file_content: item.file_content.clone(),
            file_type: item.file_type.clone(),
            created_at: now,
            updated_at: now,
        };
        self.items.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, item: &FileSystemItem) -> AppResult<FileSystemItem> {
        if !self.items.contains_key(&item.id) {
            return Err(AppError::not_found(&item.full_path));
        }

        let mut updated = item.clone();
        updated.updated_at = Utc::now();
        self.items.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, item: &FileSystemItem) -> AppResult<bool> {
        Ok(self.items.remove(&item.id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folderhub_entity::item::ItemKind;

    fn new_folder(path: &str) -> CreateItem {
        CreateItem {
            parent_id: None,
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            full_path: path.to_string(),
            kind: ItemKind::Folder,
            file_content: None,
            file_type: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = MemoryItemRepository::new();
        let a = store.insert(&new_folder("animals")).await.unwrap();
        let b = store.insert(&new_folder("people")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_full_path_rejected() {
        let store = MemoryItemRepository::new();
        store.insert(&new_folder("animals")).await.unwrap();
        let err = store.insert(&new_folder("animals")).await.unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn test_prefix_lookup_returns_anchor_and_descendants() {
        let store = MemoryItemRepository::new();
        store.insert(&new_folder("animals")).await.unwrap();
        store.insert(&new_folder("animals/dogs")).await.unwrap();
        store.insert(&new_folder("people")).await.unwrap();

        let matched = store.find_by_prefix("animals").await.unwrap();
        assert_eq!(matched.len(), 2);

        let all = store.find_by_prefix("").await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_per_item() {
        let store = MemoryItemRepository::new();
        let item = store.insert(&new_folder("animals")).await.unwrap();
        assert!(store.delete(&item).await.unwrap());
        assert!(!store.delete(&item).await.unwrap());
    }
}
