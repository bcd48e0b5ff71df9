//! Storage layer for the service
//!
//! This module provides todo persistence behind the [`TodoStore`] seam.

/// Database storage module
pub mod database;
/// Store traits shared by the batch engine and the HTTP layer
pub mod traits;

pub use database::Database;
pub use traits::{InsertReceipt, InsertStatement, TodoStore};

use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Connect to the configured database, run migrations and return the shared store handle
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<Database>> {
    info!("Initializing storage layer");

    let database = Database::new(config).await?;
    database.migrate().await?;

    info!("Storage layer initialized successfully");
    Ok(Arc::new(database))
}
