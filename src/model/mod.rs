//! Data transfer objects shared by the HTTP surface and the cache.

pub mod api;
pub mod character;
