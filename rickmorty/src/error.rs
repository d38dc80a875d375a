use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Client could not be built from the provided settings.
    #[error("Failed to build Rick and Morty API client: {0}")]
    ConfigError(String),
    /// Transport failure (connection refused, timeout, TLS, body read).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status.
    #[error("Rick and Morty API responded with status {status} for {url}")]
    ResponseError { status: u16, url: String },
    /// Upstream answered 2xx but the body did not match the expected shape.
    #[error("Failed to parse Rick and Morty API response: {0}")]
    ParseError(#[from] serde_json::Error),
}
