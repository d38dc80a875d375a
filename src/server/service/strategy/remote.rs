use crate::{
    model::character::{CharacterFilter, PaginatedCharacters},
    server::{
        cache::{self, CacheStore, QUERY_CACHE_TTL_SECS},
        error::Error,
        service::remote::RemoteSource,
    },
};

/// Cache-aside retrieval against the remote source
///
/// A cache hit is returned as-is without contacting the remote. On a miss the remote
/// result is written back with [`QUERY_CACHE_TTL_SECS`]. Cache failures never fail the
/// query; remote failures do.
pub struct RemotePreferredStrategy<'a, C: CacheStore> {
    remote: RemoteSource<'a>,
    cache: &'a C,
}

impl<'a, C: CacheStore> RemotePreferredStrategy<'a, C> {
    pub fn new(client: &'a rickmorty::Client, cache: &'a C) -> Self {
        Self {
            remote: RemoteSource::new(client),
            cache,
        }
    }

    pub async fn get_characters(
        &self,
        filter: &CharacterFilter,
    ) -> Result<PaginatedCharacters, Error> {
        let key = match cache::characters_key(filter) {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::warn!("Failed to build cache key, bypassing cache: {}", e);
                None
            }
        };

        if let Some(key) = &key {
            if let Some(cached) = cache::get_json::<_, PaginatedCharacters>(self.cache, key).await
            {
                tracing::debug!("Cache hit for {}", key);
                return Ok(cached);
            }
        }

        let result = self.remote.search(filter).await?;

        if let Some(key) = &key {
            cache::set_json(self.cache, key, &result, QUERY_CACHE_TTL_SECS).await;
        }

        Ok(result)
    }
}
