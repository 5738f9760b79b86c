//! HTTP client initialization.

use std::sync::Arc;

use crate::config::{RESOURCE_FETCH_TIMEOUT, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client used for robots.txt and sitemap fetches.
///
/// The request timeout here is the 10-second resource-fetch bound; page loads
/// go through the page driver, which applies its own 30-second timeout.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// built.
pub fn init_client(user_agent: &str) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .timeout(RESOURCE_FETCH_TIMEOUT)
        .build()?;
    Ok(Arc::new(client))
}
