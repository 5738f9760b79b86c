//! Plain HTTP page driver.
//!
//! The default [`PageDriver`] implementation. It fetches pages with `reqwest`
//! and treats the response body as the rendered HTML; pages that only exist
//! after client-side rendering will look thinner here than in a real browser,
//! which the per-page dynamic score makes visible in the report.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::{PAGE_LOAD_TIMEOUT, TCP_CONNECT_TIMEOUT};
use crate::error_handling::{DriverError, InitializationError};

use super::{FetchedPage, PageDriver};

/// Page driver backed by a dedicated `reqwest::Client`.
///
/// The client applies the 30-second page-load timeout; construction failure
/// is the fatal "browser failed to launch" case for this engine.
pub struct HttpPageDriver {
    client: reqwest::Client,
}

impl HttpPageDriver {
    /// Builds the driver with its own client and the page-load timeout.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be
    /// built; callers treat this as fatal for the crawl.
    pub fn new(user_agent: &str) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(TCP_CONNECT_TIMEOUT)
            .timeout(PAGE_LOAD_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageDriver for HttpPageDriver {
    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, DriverError> {
        let start = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DriverError::Timeout(PAGE_LOAD_TIMEOUT.as_secs())
            } else {
                DriverError::Navigation(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), value_str.to_string());
            }
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                DriverError::Timeout(PAGE_LOAD_TIMEOUT.as_secs())
            } else {
                DriverError::Body(e.to_string())
            }
        })?;

        Ok(FetchedPage {
            status,
            headers,
            html,
            load_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
