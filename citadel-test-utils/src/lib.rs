//! Test harness for the Citadel workspace.
//!
//! [`TestBuilder`] assembles a [`TestContext`] holding an in-memory SQLite database, a
//! mockito server standing in for the Rick and Morty API, and a `rickmorty::Client` pointed
//! at that server. Character fixtures cover factories, database inserts and mock endpoints.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::character::factory, TestBuilder, TestContext, TestError};
}
