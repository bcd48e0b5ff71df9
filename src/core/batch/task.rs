//! Single-item creation task

use super::types::{CreationError, CreationOutcome};
use crate::storage::{InsertStatement, TodoStore};
use tracing::{debug, warn};

/// Obtain a statement handle bound to one pooled connection
pub async fn prepare(store: &dyn TodoStore) -> Result<Box<dyn InsertStatement>, CreationError> {
    store
        .prepare_insert()
        .await
        .map_err(|e| CreationError::PrepareFailed(e.to_string()))
}

/// Run a prepared insert for `title` and read back the assigned id.
///
/// Consumes the statement, so its connection is released on every exit path.
pub async fn execute(
    mut stmt: Box<dyn InsertStatement>,
    title: &str,
) -> Result<i64, CreationError> {
    let receipt = stmt
        .execute(title)
        .await
        .map_err(|e| CreationError::ExecFailed(e.to_string()))?;

    receipt
        .last_insert_id()
        .map_err(|e| CreationError::IdRetrievalFailed(e.to_string()))
}

/// Insert one todo and return the id the store assigned.
///
/// Runs exactly one attempt. The title is not validated; an empty title is
/// inserted like any other.
pub async fn insert_title(store: &dyn TodoStore, title: &str) -> Result<i64, CreationError> {
    let stmt = prepare(store).await?;
    execute(stmt, title).await
}

/// Log the result of one attempt and turn it into an outcome
pub fn report(title: String, result: Result<i64, CreationError>) -> CreationOutcome {
    match &result {
        Ok(id) => debug!(id, title = %title, "Created todo"),
        Err(e) => warn!(kind = ?e.kind(), title = %title, "Failed to create todo: {}", e),
    }

    CreationOutcome::from_result(title, result)
}

/// Create one todo and report the result as data
pub async fn create_item(store: &dyn TodoStore, title: String) -> CreationOutcome {
    let result = insert_title(store, &title).await;
    report(title, result)
}
