//! Service layer for retrieval policy and synchronization.
//!
//! Services coordinate the remote source, the local store and the cache. Retrieval
//! strategies and the selector that falls back between them live here, along with initial
//! seeding and the reconciliation run driven by the scheduler.

pub mod character;
pub mod reconcile;
pub mod remote;
pub mod strategy;

#[cfg(test)]
mod tests;
