//! Batch creation integration tests
//!
//! Runs the coordinator against a migrated in-memory SQLite store.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use crate::common::fixtures::{numbered_titles, titles};
    use std::collections::HashSet;
    use todo_service::core::batch::{CreationErrorKind, OutcomeStatus};

    #[tokio::test]
    async fn test_batch_persists_every_title() {
        let db = TestDatabase::new().await;
        let report = db.coordinator(4).create_batch(titles(&["a", "b", "c"])).await;

        assert_eq!(report.len(), 3);
        assert_eq!(report.succeeded(), 3);

        let ids: HashSet<i64> = report.results.iter().filter_map(|r| r.id()).collect();
        assert_eq!(ids.len(), 3);

        let stored = assert_ok!(db.store().list_todos().await);
        assert_eq!(stored.len(), 3);
        for outcome in &report.results {
            let todo = stored
                .iter()
                .find(|t| Some(t.id) == outcome.id())
                .expect("reported id should be persisted");
            assert_eq!(todo.title, outcome.title());
            assert!(!todo.completed);
        }
    }

    #[tokio::test]
    async fn test_batch_outcomes_follow_input_order() {
        let db = TestDatabase::new().await;
        let input = numbered_titles("ordered", 20);
        let report = db.coordinator(8).create_batch(input.clone()).await;

        let reported: Vec<&str> = report.results.iter().map(|r| r.title()).collect();
        assert_eq!(reported, input.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_repeated_batches_create_distinct_records() {
        let db = TestDatabase::new().await;
        let coordinator = db.coordinator(2);

        let first = coordinator.create_batch(titles(&["x"])).await;
        let second = coordinator.create_batch(titles(&["x"])).await;

        assert!(first.results[0].is_success());
        assert!(second.results[0].is_success());
        assert_ne!(first.results[0].id(), second.results[0].id());

        let stored = assert_ok!(db.store().list_todos().await);
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|t| t.title == "x"));
    }

    #[tokio::test]
    async fn test_duplicate_titles_in_one_batch() {
        let db = TestDatabase::new().await;
        let report = db.coordinator(2).create_batch(titles(&["dup", "dup"])).await;

        assert_eq!(report.succeeded(), 2);
        assert_ne!(report.results[0].id(), report.results[1].id());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_large_batch_on_single_connection_pool() {
        let db = TestDatabase::new().await;
        let report = db
            .coordinator(16)
            .create_batch(numbered_titles("bulk", 100))
            .await;

        assert_eq!(report.len(), 100);
        assert_eq!(report.succeeded(), 100);

        let stored = assert_ok!(db.store().list_todos().await);
        assert_eq!(stored.len(), 100);
    }

    #[tokio::test]
    async fn test_batch_reports_errors_when_writes_are_rejected() {
        let db = TestDatabase::new().await;
        db.execute("DROP TABLE todos").await;

        let report = db.coordinator(2).create_batch(titles(&["a", "b"])).await;

        assert_eq!(report.len(), 2);
        assert_eq!(report.failed(), 2);
        for outcome in &report.results {
            assert_eq!(outcome.status(), OutcomeStatus::Error);
            assert_eq!(outcome.id(), None);
        }
    }

    #[tokio::test]
    async fn test_batch_with_mixed_outcomes() {
        let db = TestDatabase::new().await;
        db.execute("CREATE UNIQUE INDEX idx_todos_title_unique ON todos (title)")
            .await;
        assert_ok!(db.store().create_todo("ok2").await);

        let report = db.coordinator(2).create_batch(titles(&["ok1", "ok2"])).await;

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.results[0].is_success());
        assert_eq!(
            report.results[1].error_kind(),
            Some(CreationErrorKind::ExecFailed)
        );

        let stored = assert_ok!(db.store().list_todos().await);
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_touches_nothing() {
        let db = TestDatabase::new().await;
        let report = db.coordinator(4).create_batch(Vec::new()).await;

        assert!(report.is_empty());
        assert!(assert_ok!(db.store().list_todos().await).is_empty());
    }
}
