//! # folderhub-core
//!
//! Core crate for FolderHub. Contains the store trait, configuration
//! schemas, path utilities, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderHub crates.

pub mod config;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
