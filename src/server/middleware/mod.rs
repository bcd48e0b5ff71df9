//! HTTP middleware implementations
//!
//! This module provides middleware for request processing:
//! - Request ID tracking

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdMiddleware, RequestIdMiddlewareService};
