//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for the local character store and convert upstream
//! models into rows.

pub mod character;
