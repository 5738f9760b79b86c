//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::initialization::init_logger_with;
use site_audit::{crawl_and_analyze_site, Config, NoopSynthesizer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match crawl_and_analyze_site(config, &NoopSynthesizer).await {
        Ok(audit) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&audit).context("Failed to serialize audit")?
            );
            Ok(())
        }
        Err(e) => {
            // Fatal conditions become a structured payload, not partial data
            let payload = serde_json::json!({
                "success": false,
                "error": e.to_string(),
            });
            eprintln!("{}", payload);
            process::exit(1);
        }
    }
}
