//! Batch Coordinator - concurrent fan-out/fan-in of todo creation
//!
//! One task is spawned per title. A semaphore caps the number of inserts in
//! flight, and an optional deadline plus a caller-supplied cancellation token
//! stop tasks that have not started their insert yet. An insert that is
//! already executing runs to completion and reports its real result. The join
//! loop always waits for every task, so the report holds exactly one outcome
//! per submitted title.

use super::task;
use super::types::{BatchReport, CreationOutcome};
use crate::config::Config;
use crate::storage::TodoStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Configuration for the batch coordinator
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Maximum inserts in flight (default: 10)
    pub concurrency: usize,
    /// Deadline for the whole batch (default: none)
    pub timeout: Option<Duration>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout: None,
        }
    }
}

impl CoordinatorConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from service configuration; concurrency defaults to the pool size
    pub fn from_config(config: &Config) -> Self {
        Self {
            concurrency: config.batch.concurrency(config.database.max_connections),
            timeout: config.batch.timeout(),
        }
    }

    /// Set concurrency limit
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the batch deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Fans out one creation task per title and collects every outcome
pub struct BatchCoordinator {
    store: Arc<dyn TodoStore>,
    config: CoordinatorConfig,
    runtime: Option<Handle>,
}

impl BatchCoordinator {
    /// Create a coordinator that spawns onto the runtime it was created in
    pub fn new(store: Arc<dyn TodoStore>, config: CoordinatorConfig) -> Self {
        Self {
            store,
            config,
            runtime: Handle::try_current().ok(),
        }
    }

    /// Spawn creation tasks onto `handle` instead of the caller's runtime
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Get current configuration
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Create one todo per title
    pub async fn create_batch(&self, titles: Vec<String>) -> BatchReport {
        self.create_batch_with_cancel(titles, CancellationToken::new())
            .await
    }

    /// Create one todo per title, stopping unfinished tasks when `cancel` fires
    ///
    /// Returns only after every spawned task has terminated. Outcomes are in
    /// submission order.
    pub async fn create_batch_with_cancel(
        &self,
        titles: Vec<String>,
        cancel: CancellationToken,
    ) -> BatchReport {
        if titles.is_empty() {
            return BatchReport::default();
        }

        let total = titles.len();
        let start = Instant::now();
        debug!(
            total,
            concurrency = self.config.concurrency,
            "Starting batch creation"
        );

        let cancel = cancel.child_token();
        let permits = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, title) in titles.iter().cloned().enumerate() {
            let store = Arc::clone(&self.store);
            let permits = Arc::clone(&permits);
            let cancel = cancel.clone();

            let item = async move { (index, run_item(store, permits, cancel, title).await) };

            match &self.runtime {
                Some(handle) => {
                    tasks.spawn_on(item, handle);
                }
                None => {
                    tasks.spawn(item);
                }
            }
        }

        let mut outcomes: Vec<Option<CreationOutcome>> = vec![None; total];
        let deadline = self.config.timeout;
        let expired = async move {
            match deadline {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(expired);
        let mut deadline_hit = false;

        loop {
            tokio::select! {
                joined = tasks.join_next() => match joined {
                    Some(Ok((index, outcome))) => outcomes[index] = Some(outcome),
                    Some(Err(e)) => error!("Creation task terminated abnormally: {}", e),
                    None => break,
                },
                _ = &mut expired, if !deadline_hit => {
                    deadline_hit = true;
                    warn!(?deadline, "Batch deadline reached, cancelling unfinished tasks");
                    cancel.cancel();
                }
            }
        }

        let results: Vec<CreationOutcome> = outcomes
            .into_iter()
            .zip(titles)
            .map(|(outcome, title)| outcome.unwrap_or_else(|| CreationOutcome::aborted(title)))
            .collect();
        let report = BatchReport::new(results);

        info!(
            total = report.len(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            cancelled = report.cancelled(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Batch creation finished"
        );

        report
    }
}

/// Wait for an insert slot, prepare the statement, then run the insert
///
/// Cancellation is only observed until the statement is prepared. Dropping a
/// prepared statement rolls it back, so a cancelled task never leaves a row.
async fn run_item(
    store: Arc<dyn TodoStore>,
    permits: Arc<Semaphore>,
    cancel: CancellationToken,
    title: String,
) -> CreationOutcome {
    let started = tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        started = async {
            let permit = Arc::clone(&permits).acquire_owned().await.ok()?;
            Some((permit, task::prepare(store.as_ref()).await))
        } => started,
    };

    let Some((_permit, prepared)) = started else {
        return CreationOutcome::cancelled(title);
    };

    let result = match prepared {
        Ok(stmt) => task::execute(stmt, &title).await,
        Err(e) => Err(e),
    };
    task::report(title, result)
}
