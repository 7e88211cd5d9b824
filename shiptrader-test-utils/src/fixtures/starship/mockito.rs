//! Mock endpoints for the remote starship feed.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::starship::StarshipFixtures;

impl<'a> StarshipFixtures<'a> {
    /// Create a mock HTTP endpoint serving one feed page.
    ///
    /// # Arguments
    /// - `path` - Path the page is served from
    /// - `page` - Feed page body, see [`factory::starship_page`](super::factory::starship_page)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_page_endpoint(
        &mut self,
        path: &str,
        page: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint returning an arbitrary status and body.
    ///
    /// Used to simulate upstream failures such as HTML error pages or 5xx responses.
    pub fn create_raw_endpoint(
        &mut self,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
