//! Retrieval strategies for character queries.
//!
//! Two interchangeable policies answer the same query: remote-preferred consults the cache
//! and then the remote source, local-only reads the local store. The selector in
//! [`CharacterService`](crate::server::service::character::CharacterService) picks one and
//! owns the fallback between them.

pub mod local;
pub mod remote;

use crate::{
    model::character::{CharacterFilter, PaginatedCharacters},
    server::{cache::CacheStore, error::Error},
};

use self::{local::LocalOnlyStrategy, remote::RemotePreferredStrategy};

pub enum CharacterStrategy<'a, C: CacheStore> {
    RemotePreferred(RemotePreferredStrategy<'a, C>),
    LocalOnly(LocalOnlyStrategy<'a>),
}

impl<'a, C: CacheStore> CharacterStrategy<'a, C> {
    pub async fn get_characters(
        &self,
        filter: &CharacterFilter,
    ) -> Result<PaginatedCharacters, Error> {
        match self {
            Self::RemotePreferred(strategy) => strategy.get_characters(filter).await,
            Self::LocalOnly(strategy) => strategy.get_characters(filter).await,
        }
    }

    /// Name used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::RemotePreferred(_) => "remote-preferred",
            Self::LocalOnly(_) => "local-only",
        }
    }
}
