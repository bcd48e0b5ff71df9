//! Record store interface
//!
//! The batch engine and the HTTP handlers only talk to storage through these
//! traits, so tests can substitute failing or slow stores.

use crate::core::models::{Todo, UpdateTodo};
use async_trait::async_trait;
use sea_orm::{DbErr, QueryResult};

/// Abstract storage interface for todo records.
///
/// Implementations must be thread-safe (Send + Sync); one handle is shared by
/// every concurrently running creation task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Prepares a single insert.
    ///
    /// The returned statement owns one pooled connection until it is executed
    /// or dropped.
    async fn prepare_insert(&self) -> Result<Box<dyn InsertStatement>, DbErr>;

    /// Lists all todos, newest first.
    async fn list_todos(&self) -> Result<Vec<Todo>, DbErr>;

    /// Creates one todo and returns the stored record.
    async fn create_todo(&self, title: &str) -> Result<Todo, DbErr>;

    /// Overwrites title and completion flag. Returns false when no row matched.
    async fn update_todo(&self, id: i64, update: &UpdateTodo) -> Result<bool, DbErr>;

    /// Deletes one todo. Returns false when no row matched.
    async fn delete_todo(&self, id: i64) -> Result<bool, DbErr>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> Result<(), DbErr>;
}

/// A prepared single-row insert into the todos table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsertStatement: Send {
    /// Executes the insert for `title`. A statement runs at most once.
    async fn execute(&mut self, title: &str) -> Result<InsertReceipt, DbErr>;
}

/// Result metadata of an executed insert.
pub struct InsertReceipt {
    source: ReceiptSource,
}

enum ReceiptSource {
    LastInsertId(u64),
    Returned(Option<QueryResult>),
}

impl InsertReceipt {
    /// Receipt carrying the driver-reported last insert id
    pub fn from_last_insert_id(id: u64) -> Self {
        Self {
            source: ReceiptSource::LastInsertId(id),
        }
    }

    /// Receipt carrying the row produced by `RETURNING id`
    pub fn from_returned_row(row: Option<QueryResult>) -> Self {
        Self {
            source: ReceiptSource::Returned(row),
        }
    }

    /// Reads the identifier assigned by the store.
    pub fn last_insert_id(&self) -> Result<i64, DbErr> {
        match &self.source {
            ReceiptSource::LastInsertId(0) => Err(DbErr::UnpackInsertId),
            ReceiptSource::LastInsertId(id) => i64::try_from(*id)
                .map_err(|_| DbErr::Custom(format!("insert id {} out of range", id))),
            ReceiptSource::Returned(Some(row)) => row.try_get::<i64>("", "id"),
            ReceiptSource::Returned(None) => Err(DbErr::RecordNotInserted),
        }
    }
}

impl std::fmt::Debug for InsertReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            ReceiptSource::LastInsertId(id) => {
                f.debug_tuple("InsertReceipt::LastInsertId").field(id).finish()
            }
            ReceiptSource::Returned(row) => f
                .debug_tuple("InsertReceipt::Returned")
                .field(&row.is_some())
                .finish(),
        }
    }
}
