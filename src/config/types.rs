//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and programmatic configuration of a crawl.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_PAGES, DEFAULT_USER_AGENT, MAX_PAGES_CEILING};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Crawl configuration.
///
/// Doubles as the CLI argument definition for the binary and as a plain
/// struct for library callers.
///
/// # Examples
///
/// ```no_run
/// use site_audit::Config;
///
/// let config = Config {
///     base_url: "https://example.com".to_string(),
///     max_pages: 25,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "site_audit", about = "Crawl a site and report on its SEO health")]
pub struct Config {
    /// Seed URL for the crawl (absolute, http or https)
    pub base_url: String,

    /// Maximum number of pages to crawl (clamped to 200)
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Issue category label passed through to the issue synthesizer
    #[arg(long, default_value = "technical_seo")]
    pub category: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the effective crawl budget: at least one page, at most the
    /// hard ceiling.
    pub fn effective_max_pages(&self) -> usize {
        self.max_pages.clamp(1, MAX_PAGES_CEILING)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            category: "technical_seo".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_max_pages_defaults_to_fifteen() {
        let config = Config::default();
        assert_eq!(config.effective_max_pages(), 15);
    }

    #[test]
    fn test_effective_max_pages_clamps_to_ceiling() {
        let config = Config {
            max_pages: 10_000,
            ..Default::default()
        };
        assert_eq!(config.effective_max_pages(), MAX_PAGES_CEILING);
    }

    #[test]
    fn test_effective_max_pages_floor_is_one() {
        let config = Config {
            max_pages: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_max_pages(), 1);
    }
}
