// Module declarations
mod connection;
mod insert;
mod todo_ops;
mod types;

// Re-export public types
pub use insert::SeaOrmInsert;
pub use types::{DatabaseBackendType, SeaOrmDatabase};
