//! Test suite for todo-service
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared test infrastructure:
//! - In-memory SQLite database helpers
//! - Title fixtures
//!
//! ### 2. Integration Tests (`integration/`)
//! Tests that run the batch engine, the store and configuration loading
//! against a real in-memory database.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run everything
//! cargo test
//!
//! # Run only unit tests
//! cargo test --lib
//!
//! # Run integration tests
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
