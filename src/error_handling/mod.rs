//! Error handling and statistics tracking.
//!
//! Defines the crate's error taxonomy (fatal vs. recoverable) and the
//! thread-safe counters used to summarize a crawl's degraded data at the end
//! of a run.

mod stats;
mod types;

// Re-export public API
pub use stats::{log_statistics, ProcessingStats};
pub use types::{AuditError, DriverError, ErrorType, InitializationError, WarningType};
