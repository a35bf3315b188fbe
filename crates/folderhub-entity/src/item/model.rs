//! File-system item entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use folderhub_core::AppError;

/// Whether an item is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A leaf item carrying opaque string content.
    File,
    /// A container item; may have zero or more children.
    Folder,
}

impl ItemKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "folder" => Ok(Self::Folder),
            _ => Err(AppError::validation(format!(
                "Invalid item kind: '{s}'. Expected one of: file, folder"
            ))),
        }
    }
}

/// A single record of the flat, path-indexed file-system table.
///
/// `full_path` is the primary identity used for lookups and is globally
/// unique; `id` is secondary, store-assigned identity. `parent_id` is a
/// lookup relation rebuilt from path structure at write time, never
/// independently authoritative over `full_path`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileSystemItem {
    /// Unique item identifier, assigned by the store on creation.
    pub id: Uuid,
    /// Parent item ID (`None` for root-level items).
    pub parent_id: Option<Uuid>,
    /// The item's own segment name (no path separators).
    pub name: String,
    /// Complete slash-joined path from root to this item; globally unique.
    pub full_path: String,
    /// File or folder.
    pub kind: ItemKind,
    /// Opaque string payload; `None` for folders.
    pub file_content: Option<String>,
    /// File extension including the leading dot (e.g. `".txt"`); `None`
    /// for folders and extension-less files.
    pub file_type: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl FileSystemItem {
    /// Check if this is a root-level item (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this item is a file.
    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }
}

/// Data required to insert a new file-system item.
///
/// The store assigns `id` and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Parent item (`None` for root-level).
    pub parent_id: Option<Uuid>,
    /// Segment name.
    pub name: String,
    /// Full materialized path.
    pub full_path: String,
    /// File or folder.
    pub kind: ItemKind,
    /// Opaque content for files.
    pub file_content: Option<String>,
    /// Derived extension for files.
    pub file_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("file".parse::<ItemKind>().unwrap(), ItemKind::File);
        assert_eq!("FOLDER".parse::<ItemKind>().unwrap(), ItemKind::Folder);
        assert!("symlink".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemKind::Folder).unwrap(), "\"folder\"");
    }
}
