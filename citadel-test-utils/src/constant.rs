/// User agent sent by the test client to the mock server
pub static TEST_USER_AGENT: &str = "citadel-tests/0.1 (+https://github.com/autumn-order/citadel)";

/// Redis instance used by tests behind the `redis-test` feature
pub static TEST_REDIS_URL: &str = "redis://127.0.0.1:6379";
