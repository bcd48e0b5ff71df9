//! Utility modules for the service
//!
//! - **error**: Error type and its HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{Result, ServiceError};
pub use logging::init_logging;
