//! Core functionality for the service
//!
//! This module contains the batch creation engine and the domain models.

pub mod batch;
pub mod models;

// Re-export commonly used types
pub use batch::{BatchCoordinator, BatchReport, BatchRequest, CoordinatorConfig, CreationOutcome};
pub use models::Todo;
