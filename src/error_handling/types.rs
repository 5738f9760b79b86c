//! Error type definitions.
//!
//! This module defines the fatal error types for a crawl, the recoverable
//! per-page driver errors, and the error/warning categories tracked by
//! [`super::ProcessingStats`].

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Fatal errors for a crawl invocation.
///
/// Everything else in the pipeline degrades locally (a page records its
/// failure, a missing robots.txt means "no restriction"); these are the
/// conditions under which no report can be produced at all.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The seed URL could not be parsed or uses an unsupported scheme.
    ///
    /// Raised before any network resource is allocated.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL as given.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The page driver could not be constructed (the analogue of a headless
    /// browser failing to launch).
    #[error("Failed to initialize page driver: {0}")]
    DriverInit(#[from] InitializationError),
}

/// Recoverable failure loading a single page through the driver.
///
/// These never abort the crawl; the page is recorded with failure markers and
/// the loop continues.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The page load exceeded the driver's timeout.
    #[error("Page load timed out after {0} seconds")]
    Timeout(u64),

    /// The request failed at the transport level (DNS, TCP, TLS).
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Types of errors that can occur while crawling.
///
/// This enum categorizes actual failures - conditions that cost us a page or
/// a data source, even though the crawl as a whole continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// A page load timed out.
    PageLoadTimeout,
    /// A page load failed at the network level.
    PageLoadNetworkError,
    /// A page responded with a 5xx status.
    PageServerError,
    /// robots.txt could not be fetched (treated as "no restrictions").
    RobotsFetchError,
    /// No sitemap candidate could be fetched and parsed.
    SitemapFetchError,
    /// The issue synthesizer callback failed (report still returned).
    IssueSynthesisError,
}

/// Types of warnings tracked during page extraction.
///
/// Warnings indicate missing or degraded optional data that doesn't prevent
/// the page from being analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Title tag is missing.
    MissingTitle,
    /// Meta description tag is missing (optional but recommended for SEO).
    MissingMetaDescription,
    /// No canonical link tag on the page.
    MissingCanonical,
    /// A JSON-LD block failed to parse and was skipped.
    MalformedJsonLd,
    /// A page returned 200 but its content reads like a missing page.
    SoftNotFound,
}
