use fred::prelude::*;

use crate::{constant::TEST_REDIS_URL, TestError};

/// Redis test setup with automatic cleanup
///
/// Holds a connection pool and a key unique to this instance so tests running in parallel
/// never collide. The key is deleted when the struct is dropped.
pub struct RedisTest {
    pub redis_pool: Pool,
    key: String,
}

impl RedisTest {
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url(TEST_REDIS_URL)?;
        let redis_pool = Pool::new(redis_config, None, None, None, 2)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            key: Self::generate_unique_key(),
        })
    }

    /// Key reserved for this test instance
    pub fn key(&self) -> String {
        self.key.clone()
    }

    fn generate_unique_key() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        std::thread::current().id().hash(&mut hasher);

        format!("test:{}:{:x}:characters", timestamp, hasher.finish())
    }
}

impl Drop for RedisTest {
    fn drop(&mut self) {
        // Runtime may already be gone, in which case the key expires on its own
        let pool = self.redis_pool.clone();
        let key = self.key.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _: Result<(), fred::error::Error> = pool.del(&key).await;
            });
        }
    }
}
