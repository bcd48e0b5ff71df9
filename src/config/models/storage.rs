//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite://`, `postgres://` or `mysql://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// How long a caller waits for a pooled connection, in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.acquire_timeout != default_acquire_timeout() {
            self.acquire_timeout = other.acquire_timeout;
        }
        self
    }

    /// Backend named by the URL scheme, if supported
    pub fn backend(&self) -> Option<DatabaseBackendKind> {
        DatabaseBackendKind::from_url(&self.url)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }
}

/// Database backends the service can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendKind {
    Sqlite,
    Postgres,
    MySql,
}

impl DatabaseBackendKind {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("mysql://") {
            Some(Self::MySql)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(
            DatabaseBackendKind::from_url("sqlite::memory:"),
            Some(DatabaseBackendKind::Sqlite)
        );
        assert_eq!(
            DatabaseBackendKind::from_url("postgresql://localhost/todos"),
            Some(DatabaseBackendKind::Postgres)
        );
        assert_eq!(
            DatabaseBackendKind::from_url("mysql://root:password@db:3306/todo_app"),
            Some(DatabaseBackendKind::MySql)
        );
        assert_eq!(DatabaseBackendKind::from_url("redis://localhost"), None);
    }

    #[test]
    fn test_merge_keeps_base_url_when_overlay_is_default() {
        let base = DatabaseConfig {
            url: "postgres://localhost/todos".to_string(),
            ..Default::default()
        };
        let merged = base.merge(DatabaseConfig::default());
        assert_eq!(merged.url, "postgres://localhost/todos");
    }
}
