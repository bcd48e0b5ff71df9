//! Integration tests for todo-service
//!
//! These tests exercise the real SeaORM store without mocking.

pub mod batch_tests;
pub mod config_tests;
pub mod database_tests;
