use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{memory::MemoryCache, redis::RedisCache, Cache},
    config::{CacheBackend, Config},
    error::{cache::CacheError, Error},
};

/// Build the Rick and Morty API client
pub fn build_remote_client(config: &Config) -> Result<rickmorty::Client, Error> {
    let client = rickmorty::Client::builder()
        .base_url(&config.api_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect the configured cache backend
pub async fn connect_to_cache(config: &Config) -> Result<Cache, Error> {
    use fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    match config.cache_backend {
        CacheBackend::Memory => {
            tracing::info!("Using in-process query cache");

            Ok(Cache::Memory(MemoryCache::new()))
        }
        CacheBackend::Redis => {
            let redis_config =
                RedisConfig::from_url(&config.redis_url()).map_err(CacheError::from)?;
            let pool = Pool::new(redis_config, None, None, None, 6).map_err(CacheError::from)?;

            pool.connect();
            pool.wait_for_connect().await.map_err(CacheError::from)?;

            tracing::info!("Connected to Redis query cache at {}", config.redis_url());

            Ok(Cache::Redis(RedisCache::new(pool)))
        }
    }
}
