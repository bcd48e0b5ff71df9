//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod todos;

use crate::utils::error::ServiceError;
use actix_web::web;

/// JSON extractor configuration
///
/// Body parse failures become 400 responses in the service error format.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ServiceError::bad_request(err.to_string()).into())
}
