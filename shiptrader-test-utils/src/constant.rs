//! Constants shared by test contexts and mock feed endpoints.

/// Connection string for the per-test in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// User agent sent by HTTP clients built for tests.
pub static TEST_USER_AGENT: &str = "shiptrader-tests/0.1 (contact@example.com)";

/// Path of the first page served by mock starship feeds.
pub static TEST_FEED_PATH: &str = "/api/starships";
