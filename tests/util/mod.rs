//! Helpers shared by integration tests.

use citadel::server::{
    cache::{memory::MemoryCache, Cache},
    model::app::AppState,
};
use citadel_test_utils::TestContext;

/// Extension trait for building server state from a test context
pub trait TestContextExt {
    /// State backed by a fresh in-process cache
    fn to_app_state(&self) -> AppState;

    /// State backed by the given cache
    fn to_app_state_with_cache(&self, cache: Cache) -> AppState;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        self.to_app_state_with_cache(Cache::Memory(MemoryCache::new()))
    }

    fn to_app_state_with_cache(&self, cache: Cache) -> AppState {
        AppState {
            db: self.db.clone(),
            client: self.client.clone(),
            cache,
        }
    }
}
