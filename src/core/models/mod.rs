//! Core data models for the service

pub mod todo;

pub use todo::*;
