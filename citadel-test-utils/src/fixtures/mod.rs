//! Test fixtures for database rows and mock HTTP endpoints.

pub mod character;
