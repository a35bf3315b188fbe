//! File-system item domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateItem, FileSystemItem, ItemKind};
pub use tree::TreeNode;
