//! Core trait definitions shared across crates.

pub mod store;

pub use store::PathStore;
