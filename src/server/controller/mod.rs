//! HTTP controller endpoints for the Citadel web API.
//!
//! Handlers build services from the shared application state and return JSON responses.
//! Every handler is annotated for utoipa so it appears in the OpenAPI document.

pub mod character;
