//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::batch::{BatchCoordinator, CoordinatorConfig};
use crate::storage::TodoStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every actix worker shares one store handle
/// and one batch coordinator.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Record store
    pub store: Arc<dyn TodoStore>,
    /// Batch creation engine
    pub batch: Arc<BatchCoordinator>,
}

impl AppState {
    /// Create a new AppState with shared resources
    ///
    /// Must be called inside a tokio runtime; batch tasks are spawned onto it.
    pub fn new(config: Config, store: Arc<dyn TodoStore>) -> Self {
        let coordinator =
            BatchCoordinator::new(Arc::clone(&store), CoordinatorConfig::from_config(&config));

        Self {
            config: Arc::new(config),
            store,
            batch: Arc::new(coordinator),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
