//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string carrying a normalized path. Absent means the implicit root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    /// Normalized forward-slash path; empty for root.
    #[serde(default)]
    pub path: String,
}

/// Create file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// Parent path; empty for root.
    #[serde(default)]
    pub path: String,
    /// File name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    /// Opaque file content.
    #[serde(default)]
    pub content: String,
}

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Parent path; empty for root.
    #[serde(default)]
    pub path: String,
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Move item request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveItemRequest {
    /// Full path of the item to move.
    #[validate(length(min = 1, message = "current_path is required"))]
    pub current_path: String,
    /// Desired full path after the move.
    #[validate(length(min = 1, message = "new_path is required"))]
    pub new_path: String,
}
