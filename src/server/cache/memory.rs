use std::time::{Duration, Instant};

use moka::{future::Cache as MokaCache, Expiry};

use crate::server::{cache::CacheStore, error::cache::CacheError};

/// Upper bound on resident entries, least recently used entries are evicted past it
pub const MEMORY_CACHE_CAPACITY: u64 = 10_000;

/// Stored value paired with the TTL it was written with
type Entry = (String, Duration);

/// Expires each entry after the TTL it was last written with
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.1)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.1)
    }
}

/// In-process cache with per-entry expiry
///
/// Expired entries are evicted by the cache's own housekeeping whether or not they are read
/// again. Clones share the same entries.
#[derive(Clone)]
pub struct MemoryCache {
    entries: MokaCache<String, Entry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(capacity)
            .expire_after(EntryTtl)
            .build();

        Self { entries }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).await.map(|(value, _)| value))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        self.entries
            .insert(
                key.to_string(),
                (value.to_string(), Duration::from_secs(ttl_secs)),
            )
            .await;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.invalidate(key).await;

        Ok(())
    }
}
