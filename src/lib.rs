//! # todo-service
//!
//! A todo record service with a concurrent batch-creation engine.
//!
//! ## Features
//!
//! - **CRUD endpoints**: list, create, update and delete todos over HTTP
//! - **Batch creation**: one concurrent insert per title, per-item outcomes, bounded fan-out
//! - **Deadlines and cancellation**: unfinished inserts are reported as `cancelled`
//! - **Multiple backends**: SQLite (default), PostgreSQL and MySQL through SeaORM
//!
//! ## Service Mode
//!
//! ```rust,no_run
//! use todo_service::{Config, TodoService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/todo-service.yaml").await?;
//!     let service = TodoService::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Engine
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todo_service::core::batch::{BatchCoordinator, CoordinatorConfig};
//! use todo_service::storage;
//!
//! # async fn demo(config: todo_service::Config) -> todo_service::Result<()> {
//! let store = storage::connect(&config.database).await?;
//! let coordinator = BatchCoordinator::new(store, CoordinatorConfig::new().with_concurrency(4));
//! let report = coordinator.create_batch(vec!["a".into(), "b".into()]).await;
//! assert_eq!(report.len(), 2);
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{BatchCoordinator, BatchReport, CreationOutcome};
pub use storage::TodoStore;
pub use utils::error::{Result, ServiceError};

use tracing::info;

/// The todo service: configuration plus a ready-to-run HTTP server
pub struct TodoService {
    config: Config,
    server: server::HttpServer,
}

impl TodoService {
    /// Connect to the database, run migrations and build the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating todo service instance");

        let server = server::ServerBuilder::new()
            .with_config(config.clone())
            .build()
            .await?;

        Ok(Self { config, server })
    }

    /// Run the HTTP server until shutdown
    pub async fn run(self) -> Result<()> {
        info!(
            "Starting {} v{} on {}",
            NAME,
            VERSION,
            self.config.server.address()
        );

        self.server.start().await?;

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build information of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
