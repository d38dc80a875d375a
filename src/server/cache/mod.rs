//! Key-value cache with per-entry expiration.
//!
//! The cache memoizes remote query results and is strictly best-effort: callers treat a
//! failed read as a miss and a failed write as a success. [`Cache`] selects the backend at
//! startup; services stay generic over [`CacheStore`] so tests can inject failing doubles.

pub mod memory;
pub mod redis;

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};

use crate::{model::character::CharacterFilter, server::error::cache::CacheError};

use self::{memory::MemoryCache, redis::RedisCache};

/// Time-to-live for cached query results
pub const QUERY_CACHE_TTL_SECS: u64 = 3600;

static CHARACTERS_KEY_PREFIX: &str = "characters";

/// String-keyed store with per-entry expiry
pub trait CacheStore: Clone + Send + Sync + 'static {
    /// Returns the stored value, or `None` when absent or expired
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CacheError>> + Send;

    /// Stores `value` under `key`, expiring after `ttl_secs`
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> impl Future<Output = Result<(), CacheError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), CacheError>> + Send;
}

/// Cache backend selected by `CACHE_BACKEND`
#[derive(Clone)]
pub enum Cache {
    Redis(RedisCache),
    Memory(MemoryCache),
}

impl CacheStore for Cache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            Self::Redis(cache) => cache.get(key).await,
            Self::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        match self {
            Self::Redis(cache) => cache.set(key, value, ttl_secs).await,
            Self::Memory(cache) => cache.set(key, value, ttl_secs).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self {
            Self::Redis(cache) => cache.delete(key).await,
            Self::Memory(cache) => cache.delete(key).await,
        }
    }
}

/// Cache key for a character query
///
/// An empty filter maps to `characters:all`; any other filter maps to `characters:` followed
/// by its JSON form with absent fields omitted.
pub fn characters_key(filter: &CharacterFilter) -> Result<String, CacheError> {
    if filter.is_empty() {
        return Ok(format!("{}:all", CHARACTERS_KEY_PREFIX));
    }

    Ok(format!(
        "{}:{}",
        CHARACTERS_KEY_PREFIX,
        serde_json::to_string(filter)?
    ))
}

/// Reads and deserializes a cached value
///
/// Backend failures and undecodable payloads are logged and reported as a miss.
pub async fn get_json<C, T>(cache: &C, key: &str) -> Option<T>
where
    C: CacheStore,
    T: DeserializeOwned,
{
    let payload = match cache.get(key).await {
        Ok(payload) => payload?,
        Err(e) => {
            tracing::warn!("Cache read for {} failed, treating as miss: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Cached payload for {} is unreadable, treating as miss: {}", key, e);
            None
        }
    }
}

/// Serializes and stores a value, logging instead of failing
pub async fn set_json<C, T>(cache: &C, key: &str, value: &T, ttl_secs: u64)
where
    C: CacheStore,
    T: Serialize,
{
    let result = match serde_json::to_string(value) {
        Ok(payload) => cache.set(key, &payload, ttl_secs).await,
        Err(e) => Err(CacheError::from(e)),
    };

    if let Err(e) = result {
        tracing::warn!("Cache write for {} failed, continuing without it: {}", key, e);
    }
}
