//! # folderhub-database
//!
//! PostgreSQL connection management and concrete [`PathStore`] store
//! implementations for FolderHub: the sqlx-backed [`ItemRepository`] and
//! the DashMap-backed [`MemoryItemRepository`] used by tests.
//!
//! [`PathStore`]: folderhub_core::traits::PathStore
//! [`ItemRepository`]: repositories::item::ItemRepository
//! [`MemoryItemRepository`]: repositories::memory::MemoryItemRepository

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
