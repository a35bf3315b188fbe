//! Path-hierarchy CRUD and retrieval operations.

use std::sync::Arc;

use tracing::info;

use folderhub_core::path::{extension_of, join_path, parent_path};
use folderhub_core::result::AppResult;
use folderhub_core::traits::PathStore;
use folderhub_core::AppError;
use folderhub_entity::item::{CreateItem, FileSystemItem, ItemKind, TreeNode};

use super::tree::build_tree;

/// The store the service orchestrates.
pub type ItemStore = dyn PathStore<FileSystemItem, CreateItem>;

/// Orchestrates the item store to implement create, retrieve, move, and
/// remove over the virtual hierarchy.
///
/// Every mutation re-derives `parent_id` and `full_path` from the supplied
/// path strings and checks existence preconditions first. The checks and the
/// subsequent write are separate store round-trips, so the store's own
/// uniqueness constraint remains the final arbiter under concurrency.
#[derive(Clone)]
pub struct FolderService {
    store: Arc<ItemStore>,
}

impl FolderService {
    /// Create a new folder service over the given store.
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    /// Retrieve the nested tree anchored at `path`.
    ///
    /// The empty path is the implicit root and always exists; any other
    /// path must resolve to a stored item. A prefix fetch that yields a
    /// single file is presented as that file itself rather than nested
    /// under a synthetic root.
    pub async fn retrieve(&self, path: &str) -> AppResult<Vec<TreeNode>> {
        let anchor = if path.is_empty() {
            None
        } else {
            Some(
                self.store
                    .find_by_path(path)
                    .await?
                    .ok_or_else(|| AppError::not_found(path))?,
            )
        };

        let mut items = self.store.find_by_prefix(path).await?;

        if items.len() == 1 && items[0].is_file() {
            items[0].parent_id = None;
            return Ok(build_tree(&items, None));
        }

        Ok(build_tree(&items, anchor.map(|a| a.id)))
    }

    /// Create a file under `path` with the given content.
    pub async fn create_file(
        &self,
        path: &str,
        name: &str,
        content: &str,
    ) -> AppResult<FileSystemItem> {
        self.create_item(path, name, ItemKind::File, Some(content.to_string()))
            .await
    }

    /// Create a folder under `path`.
    pub async fn create_folder(&self, path: &str, name: &str) -> AppResult<FileSystemItem> {
        self.create_item(path, name, ItemKind::Folder, None).await
    }

    async fn create_item(
        &self,
        path: &str,
        name: &str,
        kind: ItemKind,
        content: Option<String>,
    ) -> AppResult<FileSystemItem> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Item name cannot be empty"));
        }
        if name.contains('/') {
            return Err(AppError::validation(
                "Item name cannot contain path separators",
            ));
        }

        let full_path = join_path(path, name);

        let parent = if path.is_empty() {
            None
        } else {
            self.store.find_by_path(path).await?
        };

        // An occupied target is reported as a conflict even when the stated
        // parent path is also invalid.
        if self.store.find_by_path(&full_path).await?.is_some() {
            return Err(AppError::already_exists(name));
        }
        if !path.is_empty() && parent.is_none() {
            return Err(AppError::not_found(name));
        }

        let file_type = match kind {
            ItemKind::File => extension_of(name),
            ItemKind::Folder => None,
        };

        let item = CreateItem {
            parent_id: parent.map(|p| p.id),
            name: name.to_string(),
            full_path,
            kind,
            file_content: content,
            file_type,
        };

        let created = self.store.insert(&item).await?;

        info!(
            item_id = %created.id,
            path = %created.full_path,
            kind = %created.kind,
            "Item created"
        );

        Ok(created)
    }

    /// Move the item at `current_path` so that its full path becomes
    /// `new_path`.
    ///
    /// The destination's parent segment must resolve to a stored item:
    /// moving an item to the top level is not supported, because the empty
    /// parent path has no backing record. Descendants of the moved item are
    /// not rewritten.
    pub async fn move_item(
        &self,
        current_path: &str,
        new_path: &str,
    ) -> AppResult<FileSystemItem> {
        let mut item = self
            .store
            .find_by_path(current_path)
            .await?
            .ok_or_else(|| AppError::not_found(current_path))?;

        let new_root_path = parent_path(new_path);
        let new_root = self
            .store
            .find_by_path(&new_root_path)
            .await?
            .ok_or_else(|| AppError::not_found(&new_root_path))?;

        item.parent_id = Some(new_root.id);
        item.full_path = new_path.to_string();

        let moved = self.store.update(&item).await?;

        info!(
            item_id = %moved.id,
            from = %current_path,
            to = %moved.full_path,
            "Item moved"
        );

        Ok(moved)
    }

    /// Remove the single item at `path`. Descendants are not removed.
    pub async fn remove(&self, path: &str) -> AppResult<()> {
        let item = self
            .store
            .find_by_path(path)
            .await?
            .ok_or_else(|| AppError::not_found(path))?;

        self.store.delete(&item).await?;

        info!(item_id = %item.id, path = %path, "Item removed");

        Ok(())
    }
}
