use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Default user agent sent to the upstream API
pub static DEFAULT_USER_AGENT: &str = concat!("citadel/", env!("CARGO_PKG_VERSION"));

/// Which backend serves the query cache
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidEnvValue {
                var: "CACHE_BACKEND".to_string(),
                reason: format!("expected \"redis\" or \"memory\", got {:?}", other),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub api_url: String,
    pub user_agent: String,
    pub cache_backend: CacheBackend,
    pub redis_host: String,
    pub redis_port: u16,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let or_default =
            |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            api_url: or_default("RICK_AND_MORTY_API_URL", rickmorty::client::DEFAULT_BASE_URL),
            user_agent: or_default("USER_AGENT", DEFAULT_USER_AGENT),
            cache_backend: or_default("CACHE_BACKEND", "redis").parse()?,
            redis_host: or_default("REDIS_HOST", "localhost"),
            redis_port: parse_port("REDIS_PORT", &or_default("REDIS_PORT", "6379"))?,
            port: parse_port("PORT", &or_default("PORT", "3000"))?,
        })
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

fn parse_port(var: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: format!("{:?} is not a valid port: {}", value, e),
    })
}
