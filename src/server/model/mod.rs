//! Server application models.
//!
//! Application state shared by HTTP handlers and the scheduler, plus type aliases for
//! database models.

pub mod app;
pub mod db;
