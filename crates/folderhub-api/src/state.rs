//! Application state shared across all handlers.

use std::sync::Arc;

use folderhub_core::config::AppConfig;
use folderhub_service::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Path-hierarchy service.
    pub folders: Arc<FolderService>,
}

impl AppState {
    /// Assemble the application state.
    pub fn new(config: Arc<AppConfig>, folders: Arc<FolderService>) -> Self {
        Self { config, folders }
    }
}
