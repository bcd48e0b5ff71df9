//! Database integration tests
//!
//! Tests store operations using a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use todo_service::core::models::UpdateTodo;
    use todo_service::storage::database::{Database, DatabaseBackendType};

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.store().health_check().await);
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let db = assert_ok!(Database::new(&test_db_config()).await);
        assert_ok!(db.migrate().await);
        assert_ok!(db.migrate().await);
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let db = TestDatabase::new().await;
        let store = db.store();

        let first = assert_ok!(store.create_todo("first").await);
        let second = assert_ok!(store.create_todo("second").await);
        assert!(second.id > first.id);
        assert!(!first.completed);

        let todos = assert_ok!(store.list_todos().await);
        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_update_todo() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let todo = assert_ok!(store.create_todo("draft").await);

        let update = UpdateTodo {
            title: "final".to_string(),
            completed: true,
        };
        assert!(assert_ok!(store.update_todo(todo.id, &update).await));
        assert!(!assert_ok!(store.update_todo(todo.id + 100, &update).await));

        let todos = assert_ok!(store.list_todos().await);
        assert_eq!(todos[0].title, "final");
        assert!(todos[0].completed);
        assert_eq!(todos[0].created_at, todo.created_at);
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let db = TestDatabase::new().await;
        let store = db.store();
        let todo = assert_ok!(store.create_todo("temporary").await);

        assert!(assert_ok!(store.delete_todo(todo.id).await));
        assert!(!assert_ok!(store.delete_todo(todo.id).await));
        assert!(assert_ok!(store.list_todos().await).is_empty());
    }

    #[tokio::test]
    async fn test_prepared_insert_returns_new_id() {
        let db = TestDatabase::new().await;
        let store = db.store();

        let mut statement = assert_ok!(store.prepare_insert().await);
        let receipt = assert_ok!(statement.execute("prepared").await);
        let id = assert_ok!(receipt.last_insert_id());
        assert!(id > 0);

        let todos = assert_ok!(store.list_todos().await);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, id);
        assert_eq!(todos[0].title, "prepared");
    }

    #[tokio::test]
    async fn test_dropped_statement_leaves_no_row() {
        let db = TestDatabase::new().await;
        let store = db.store();

        let statement = assert_ok!(store.prepare_insert().await);
        drop(statement);

        assert!(assert_ok!(store.list_todos().await).is_empty());
    }

    #[tokio::test]
    async fn test_file_database_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("todos.db");
        let mut config = test_db_config();
        config.url = format!("sqlite://{}?mode=rwc", path.display());

        let db = assert_ok!(todo_service::storage::connect(&config).await);
        assert_ok!(db.ping().await);
        assert!(path.exists());
    }
}
