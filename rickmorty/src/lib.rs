//! Minimal asynchronous client for the public Rick and Morty API.
//!
//! The client only covers the character endpoints: filtered listing, page listing, and
//! fetching characters by ID. Responses are deserialized into the upstream's own shapes in
//! [`model`]; flattening them into application records is left to the consumer.
//!
//! ```ignore
//! let client = rickmorty::Client::builder()
//!     .base_url("https://rickandmortyapi.com/api")
//!     .user_agent("citadel/0.1")
//!     .build()?;
//!
//! let page = client.character().get_page(1).await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;
