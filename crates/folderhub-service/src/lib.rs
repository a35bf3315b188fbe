//! # folderhub-service
//!
//! Business logic for FolderHub: the path-hierarchy service that maintains
//! full-path uniqueness, enforces existence preconditions before each
//! mutation, and reconstructs nested trees from the flat item table.

pub mod folder;

pub use folder::service::FolderService;
