use crate::config::{DatabaseBackendKind, DatabaseConfig};
use crate::utils::error::{Result, ServiceError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if config.backend() == Some(DatabaseBackendKind::Sqlite) {
            ensure_sqlite_dir(&config.url)?;
        }

        let db = Self::try_connect(config).await?;
        let database = Self::from_connection(db);
        info!(
            "Database connection established ({:?}, max {} connections)",
            database.backend_type(),
            config.max_connections
        );
        Ok(database)
    }

    /// Wrap an already established connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let backend = db.get_database_backend();
        Self { db, backend }
    }

    async fn try_connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(config.connect_timeout())
            .acquire_timeout(config.acquire_timeout())
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        // An in-memory SQLite database lives only as long as its connection
        if !is_sqlite_memory(&config.url) {
            opt.idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        Database::connect(opt).await.map_err(ServiceError::Database)
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend.into()
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            ServiceError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(ServiceError::Database)?;
        Ok(())
    }

    /// Ping the database
    pub async fn ping(&self) -> std::result::Result<(), DbErr> {
        debug!("Performing database health check");
        self.db.ping().await
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Create the parent directory of a file-backed SQLite database
fn ensure_sqlite_dir(url: &str) -> Result<()> {
    if is_sqlite_memory(url) {
        return Ok(());
    }

    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or_default();

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating SQLite data directory {:?}", parent);
            std::fs::create_dir_all(parent).map_err(|e| {
                ServiceError::internal(format!("Failed to create data directory: {}", e))
            })?;
        }
    }
    Ok(())
}
