//! Configuration integration tests
//!
//! Loads YAML files from disk and wires them into a running store and coordinator.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::fixtures::numbered_titles;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use todo_service::config::{Config, LogFormat};
    use todo_service::core::batch::{BatchCoordinator, CoordinatorConfig};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_config_file_drives_store_and_batch() {
        let file = write_config(
            r#"
server:
  host: "127.0.0.1"
  port: 9090
database:
  url: "sqlite::memory:"
  max_connections: 1
batch:
  max_concurrency: 3
  timeout_secs: 30
logging:
  level: "debug"
  format: json
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.server.address(), "127.0.0.1:9090");
        assert_eq!(config.logging.format, LogFormat::Json);

        let coordinator_config = CoordinatorConfig::from_config(&config);
        assert_eq!(coordinator_config.concurrency, 3);
        assert_eq!(coordinator_config.timeout, Some(Duration::from_secs(30)));

        let store = assert_ok!(todo_service::storage::connect(&config.database).await);
        let coordinator = BatchCoordinator::new(store, coordinator_config);
        let report = coordinator.create_batch(numbered_titles("cfg", 5)).await;
        assert_eq!(report.succeeded(), 5);
    }

    #[tokio::test]
    async fn test_batch_concurrency_defaults_to_pool_size() {
        let file = write_config(
            r#"
database:
  url: "sqlite::memory:"
  max_connections: 7
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);
        let coordinator_config = CoordinatorConfig::from_config(&config);
        assert_eq!(coordinator_config.concurrency, 7);
        assert_eq!(coordinator_config.timeout, None);
    }

    #[tokio::test]
    async fn test_invalid_config_file_is_rejected() {
        let file = write_config(
            r#"
database:
  url: "redis://localhost:6379"
"#,
        );
        assert!(Config::from_file(file.path()).await.is_err());

        let file = write_config("batch:\n  max_concurrency: 0\n");
        assert!(Config::from_file(file.path()).await.is_err());

        let file = write_config("server: [not, a, map]\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_config_yaml_round_trips_through_file() {
        let mut config = Config::default();
        config.apply_database_url("sqlite::memory:");
        config.batch.max_concurrency = Some(2);

        let file = write_config(&assert_ok!(config.to_yaml()));
        let loaded = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(loaded.database.url, "sqlite::memory:");
        assert_eq!(loaded.batch.max_concurrency, Some(2));
        assert_eq!(loaded.server.port, config.server.port);
    }
}
