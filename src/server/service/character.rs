use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CharacterFilter, PaginatedCharacters},
    server::{
        cache::CacheStore,
        data::character::CharacterRepository,
        error::Error,
        service::{
            remote::RemoteSource,
            strategy::{
                local::LocalOnlyStrategy, remote::RemotePreferredStrategy, CharacterStrategy,
            },
        },
    },
};

/// Number of characters persisted by initial seeding
pub const SEED_BATCH_SIZE: usize = 15;

pub struct CharacterService<'a, C: CacheStore> {
    db: &'a DatabaseConnection,
    client: &'a rickmorty::Client,
    cache: &'a C,
}

impl<'a, C: CacheStore> CharacterService<'a, C> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a rickmorty::Client, cache: &'a C) -> Self {
        Self { db, client, cache }
    }

    /// Gets a stored character by ID
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The stored character
    /// - `Err(Error::CharacterNotFound)` - No character with this ID is stored locally
    /// - `Err(Error::PersistenceError)` - Local store query failed
    pub async fn find_by_id(&self, id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(id).await? {
            Some(character) => Ok(character.into()),
            None => Err(Error::CharacterNotFound(id)),
        }
    }

    /// Queries the local store directly, bypassing cache, remote and fallback
    ///
    /// Blank criteria are ignored.
    pub async fn find_all(&self, filter: &CharacterFilter) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let filter = filter.clone().normalized();

        let characters = character_repo.find(&filter).await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Searches characters, falling back once from the remote source to the local store
    ///
    /// With `prefer_remote` the cache and remote source are tried first and the local store
    /// answers if they fail. If the local store fails too, or fails on a local-only search,
    /// the empty result is returned. Blank criteria are ignored. Never fails.
    pub async fn search_characters(
        &self,
        filter: &CharacterFilter,
        prefer_remote: bool,
    ) -> PaginatedCharacters {
        let filter = &filter.clone().normalized();
        let strategy = self.strategy(prefer_remote);

        let error = match strategy.get_characters(filter).await {
            Ok(result) => return result,
            Err(e) => e,
        };

        if !prefer_remote {
            tracing::error!(
                "{} search failed, returning empty result: {}",
                strategy.name(),
                error
            );
            return PaginatedCharacters::empty();
        }

        tracing::error!(
            "{} search failed, falling back to local store: {}",
            strategy.name(),
            error
        );

        let fallback = self.strategy(false);
        match fallback.get_characters(filter).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    "{} fallback failed, returning empty result: {}",
                    fallback.name(),
                    e
                );
                PaginatedCharacters::empty()
            }
        }
    }

    /// Seeds an empty local store from the first upstream page
    ///
    /// Persists at most [`SEED_BATCH_SIZE`] characters. A store that already holds any
    /// character is left untouched without contacting the remote source.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of characters persisted, 0 if the store was not empty
    /// - `Err(Error::RemoteUnavailable)` - Fetching the first page failed
    /// - `Err(Error::PersistenceError)` - Counting or writing characters failed
    pub async fn populate_initial_characters(&self) -> Result<usize, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let existing = character_repo.count().await?;
        if existing > 0 {
            tracing::info!(
                "Local store already holds {} characters, skipping initial seed",
                existing
            );
            return Ok(0);
        }

        let mut characters = RemoteSource::new(self.client).get_page(1).await?;
        characters.truncate(SEED_BATCH_SIZE);

        let stored = character_repo.upsert_many(characters).await?;

        tracing::info!("Seeded local store with {} characters", stored.len());

        Ok(stored.len())
    }

    fn strategy(&self, prefer_remote: bool) -> CharacterStrategy<'a, C> {
        if prefer_remote {
            CharacterStrategy::RemotePreferred(RemotePreferredStrategy::new(
                self.client,
                self.cache,
            ))
        } else {
            CharacterStrategy::LocalOnly(LocalOnlyStrategy::new(self.db))
        }
    }
}
