//! Logging utilities
//!
//! This module wires `tracing` output for the service binary.

pub mod logging;

pub use logging::init_logging;
