//! # folderhub-api
//!
//! HTTP API layer for FolderHub built on Axum.
//!
//! Provides the folder endpoints, request/response DTOs with validation,
//! CORS middleware, and the mapping of domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
