use fred::prelude::*;

use crate::server::{cache::CacheStore, error::cache::CacheError};

/// Cache backed by Redis/Valkey through a shared connection pool
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let value: Option<String> = self.pool.get(key).await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        let _: () = self
            .pool
            .set(
                key,
                value,
                Some(Expiration::EX(ttl_secs as i64)),
                None,
                false,
            )
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let _: i64 = self.pool.del(key).await?;

        Ok(())
    }
}
