//! Error types for the Citadel server.
//!
//! Domain errors (configuration, cache) live in their own modules and are aggregated into
//! [`Error`] so the `?` operator works across layers. Every error converts into an HTTP
//! response; anything without a specific mapping becomes a logged 500 with a generic body.

pub mod cache;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{cache::CacheError, config::ConfigError},
};

/// Main error type for the Citadel server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Remote source errors (network failure, non-2xx status, malformed body)
/// - Persistence errors (local store queries and writes)
/// - Cache errors (never fatal to a read, swallowed where they occur)
/// - Scheduler errors (job registration, scheduler startup)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Cache backend error.
    #[error(transparent)]
    CacheError(#[from] CacheError),
    /// No character with the requested ID exists in the local store.
    #[error("Character {0} not found")]
    CharacterNotFound(i32),
    /// The remote source could not be reached or returned an unusable response.
    #[error("Remote source unavailable: {0}")]
    RemoteUnavailable(#[from] rickmorty::Error),
    /// Local store query or write failure.
    #[error("Persistence error: {0}")]
    PersistenceError(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For lookups of a character ID that is not stored locally
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CacheError(err) => err.into_response(),
            Self::CharacterNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("Character {} not found", id),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so internal details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
