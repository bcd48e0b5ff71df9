//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations applied.

use sea_orm::ConnectionTrait;
use std::sync::Arc;
use todo_service::config::DatabaseConfig;
use todo_service::core::batch::{BatchCoordinator, CoordinatorConfig};
use todo_service::storage::{Database, TodoStore};

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let inner = todo_service::storage::connect(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");
        Self { inner }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get the database as a shared store handle
    pub fn store(&self) -> Arc<dyn TodoStore> {
        self.inner.clone()
    }

    /// Batch coordinator over this database
    pub fn coordinator(&self, concurrency: usize) -> BatchCoordinator {
        BatchCoordinator::new(
            self.store(),
            CoordinatorConfig::new().with_concurrency(concurrency),
        )
    }

    /// Run raw SQL against the test database
    pub async fn execute(&self, sql: &str) {
        self.inner
            .connection()
            .execute_unprepared(sql)
            .await
            .unwrap_or_else(|e| panic!("Failed to execute `{}`: {}", sql, e));
    }
}

/// In-memory SQLite only supports one pooled connection
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        acquire_timeout: 30,
    }
}
