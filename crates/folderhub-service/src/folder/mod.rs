//! Path-hierarchy service and tree construction.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::build_tree;
