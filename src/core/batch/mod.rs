//! Batch creation engine
//!
//! This module fans a list of titles out into concurrent single-insert tasks
//! and fans their outcomes back into one report.

mod coordinator;
mod task;
mod types;


// Re-export all public types
pub use coordinator::{BatchCoordinator, CoordinatorConfig};
pub use task::{create_item, insert_title};
pub use types::{
    BatchReport, BatchRequest, CreationError, CreationErrorKind, CreationOutcome, OutcomeStatus,
};
