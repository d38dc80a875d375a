use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::{endpoints::character::CharacterApi, error::Error};

/// Default upstream base URL
pub static DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Rick and Morty API client
///
/// Cheap to clone, all clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientRef>,
}

#[derive(Debug)]
struct ClientRef {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a [`ClientBuilder`] with default settings
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access the character endpoints
    pub fn character(&self) -> CharacterApi<'_> {
        CharacterApi::new(self)
    }

    /// Base URL requests are made against, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Sends a GET request to `{base_url}{path}` and deserializes the JSON body
    ///
    /// # Returns
    /// - `Ok(T)`: 2xx response with a body matching `T`
    /// - `Err(Error::ResponseError)`: non-2xx response
    /// - `Err(Error::ParseError)`: body did not match `T`
    /// - `Err(Error::ReqwestError)`: transport failure
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.inner.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self.inner.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ResponseError {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL, e.g. to point the client at a mock server
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client
    ///
    /// # Returns
    /// - `Err(Error::ConfigError)`: base URL is empty or not http(s)
    /// - `Err(Error::ReqwestError)`: underlying HTTP client failed to initialize
    pub fn build(self) -> Result<Client, Error> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::ConfigError(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        let mut http = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(Client {
            inner: Arc::new(ClientRef {
                http: http.build()?,
                base_url: self.base_url,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
