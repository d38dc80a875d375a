use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum CacheError {
    /// Redis/Valkey command or connection failure
    #[error(transparent)]
    Redis(#[from] fred::error::Error),
    /// Cached payload could not be serialized or deserialized
    #[error("Failed to serialize cache payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
