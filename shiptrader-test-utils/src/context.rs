//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for Phase 2 test execution.
//! The context includes an in-memory SQLite database and a mockito server standing in for the
//! remote starship feed.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Database connection to an in-memory SQLite database
/// - Mock HTTP server for the remote starship feed
/// - Collection of mock endpoints for assertion
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_starship_tables().build().await?;
///
/// let starship = test.starship().insert_mock_starship("Starfighter").await?;
/// let listing = test.listing().insert_mock_listing(starship.id, 100, 1).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for feed endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without the test utilities depending on the
    /// main shiptrader crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Absolute URL for a path on the mock feed server.
    pub fn feed_url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// Starts a mock HTTP server and connects to a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext {
            server: mock_server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
