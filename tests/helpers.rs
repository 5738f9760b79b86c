//! Shared test helpers: a canned-HTML page driver.
//!
//! The fake driver substitutes for the browser engine, returning prepared
//! responses per URL so crawl behavior can be exercised without any network.

use std::collections::HashMap;

use site_audit::driver::{FetchedPage, PageDriver};
use site_audit::DriverError;

/// A page driver serving canned responses keyed by exact URL.
#[derive(Default)]
pub struct FakeDriver {
    responses: HashMap<String, FetchedPage>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a 200 response with the given HTML.
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.with_response(url, 200, HashMap::new(), html, 100)
    }

    /// Registers a fully specified response.
    pub fn with_response(
        mut self,
        url: &str,
        status: u16,
        headers: HashMap<String, String>,
        html: &str,
        load_time_ms: u64,
    ) -> Self {
        self.responses.insert(
            url.to_string(),
            FetchedPage {
                status,
                headers,
                html: html.to_string(),
                load_time_ms,
            },
        );
        self
    }
}

impl PageDriver for FakeDriver {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, DriverError> {
        match self.responses.get(url) {
            Some(page) => Ok(page.clone()),
            None => Err(DriverError::Navigation(format!(
                "no canned response for {}",
                url
            ))),
        }
    }
}
