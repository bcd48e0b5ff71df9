//! Server builder

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::storage::TodoStore;
use crate::utils::error::{Result, ServiceError};
use std::sync::Arc;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn TodoStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve from this store instead of connecting to `database.url`
    pub fn with_store(mut self, store: Arc<dyn TodoStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::config("Configuration is required"))?;

        match self.store {
            Some(store) => Ok(HttpServer::with_store(&config, store)),
            None => HttpServer::new(&config).await,
        }
    }
}
