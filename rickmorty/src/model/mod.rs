//! Upstream response and query shapes.

pub mod character;
pub mod page;
