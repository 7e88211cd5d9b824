//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// catalog and listing fixtures, and mock feed endpoints. Methods can be chained together
/// and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_starship_tables: bool,

    // Database fixtures to insert
    starships: Vec<String>,
    listings: Vec<(String, i64, i32)>, // (starship_class, price, listing_time)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    page_endpoints: Vec<(String, Value, usize)>, // (path, page, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_starship_tables: false,
            starships: Vec::new(),
            listings: Vec::new(),
            mock_builders: Vec::new(),
            page_endpoints: Vec::new(),
        }
    }

    /// Add the starship and listing tables to the test database.
    pub fn with_starship_tables(mut self) -> Self {
        self.include_starship_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiptrader_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), shiptrader_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Starship)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock starship of the given class into the database.
    ///
    /// Starships are inserted in call order, so the first call for a class owns the lowest ID.
    pub fn with_mock_starship(mut self, starship_class: impl Into<String>) -> Self {
        self.starships.push(starship_class.into());
        self
    }

    /// Insert a mock listing for a starship class queued with `with_mock_starship`.
    ///
    /// The listing references the first queued starship with a matching class.
    ///
    /// # Arguments
    /// - `starship_class` - Class of a starship added via `with_mock_starship`
    /// - `price` - Asking price
    /// - `listing_time` - Activation counter, `0` for an inactive listing
    pub fn with_mock_listing(
        mut self,
        starship_class: impl Into<String>,
        price: i64,
        listing_time: i32,
    ) -> Self {
        self.listings
            .push((starship_class.into(), price, listing_time));
        self
    }

    /// Serve a feed page from the mock server.
    ///
    /// # Arguments
    /// - `path` - Path of the page on the mock server
    /// - `page` - Page body, usually built with `factory::starship_page`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_page_endpoint(
        mut self,
        path: impl Into<String>,
        page: Value,
        expected_requests: usize,
    ) -> Self {
        self.page_endpoints
            .push((path.into(), page, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (starship tables if requested, then custom tables)
    /// 2. Inserts starships, then listings
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then feed pages)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::Fixture)` - A listing referenced a starship class that was never queued
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_starship_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Starship),
                schema.create_table_from_entity(entity::prelude::Listing),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let mut starships = Vec::new();
        for starship_class in self.starships {
            starships.push(setup.starship().insert_mock_starship(&starship_class).await?);
        }

        for (starship_class, price, listing_time) in self.listings {
            let ship_type = starships
                .iter()
                .find(|s| s.starship_class == starship_class)
                .map(|s| s.id)
                .ok_or_else(|| {
                    TestError::Fixture(format!(
                        "no mock starship with class {starship_class:?} was queued before the listing"
                    ))
                })?;

            setup
                .listing()
                .insert_mock_listing(ship_type, price, listing_time)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, page, expected) in self.page_endpoints {
            mocks.push(
                setup
                    .starship()
                    .create_page_endpoint(&path, &page, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
