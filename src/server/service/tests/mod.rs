use citadel_test_utils::prelude::*;
use fred::error::{Error as RedisError, ErrorKind as RedisErrorKind};

use crate::server::{cache::CacheStore, error::cache::CacheError};


fn cache_down() -> CacheError {
    RedisError::new(RedisErrorKind::IO, "cache is down").into()
}

/// Cache whose every operation fails
#[derive(Clone, Default)]
struct FailingCache;

impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(cache_down())
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_secs: u64) -> Result<(), CacheError> {
        Err(cache_down())
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(cache_down())
    }
}
