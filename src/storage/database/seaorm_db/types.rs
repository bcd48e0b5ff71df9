use sea_orm::{DatabaseConnection, DbBackend};

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend the pool is connected to
    pub(super) backend: DbBackend,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    SQLite,
    PostgreSQL,
    MySQL,
}

impl From<DbBackend> for DatabaseBackendType {
    fn from(backend: DbBackend) -> Self {
        match backend {
            DbBackend::Sqlite => Self::SQLite,
            DbBackend::Postgres => Self::PostgreSQL,
            DbBackend::MySql => Self::MySQL,
        }
    }
}
