//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and the resulting responses are
//! checked for status and JSON body.

mod character;

use axum::{body::to_bytes, response::Response};
use citadel_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use crate::TestContextExt;

/// Reads a JSON response body
async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
