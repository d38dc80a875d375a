//! Utility helpers for server operations.
//!
//! Timing of async operations and request logging middleware for the HTTP surface.

pub mod request_log;
pub mod timing;
