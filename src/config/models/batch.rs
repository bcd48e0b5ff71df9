//! Batch creation configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch creation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum inserts in flight per batch (defaults to the database pool size)
    #[serde(default)]
    pub max_concurrency: Option<usize>,
    /// Deadline for a whole batch in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BatchConfig {
    /// Merge batch configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_concurrency.is_some() {
            self.max_concurrency = other.max_concurrency;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        self
    }

    /// Concurrency limit, falling back to the pool size
    pub fn concurrency(&self, pool_size: u32) -> usize {
        self.max_concurrency.unwrap_or(pool_size as usize).max(1)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
