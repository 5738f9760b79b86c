//! Processing statistics tracking.
//!
//! Thread-safe counters for the errors and warnings observed during a crawl.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, WarningType};

/// Thread-safe statistics tracker for a crawl.
///
/// Tracks errors and warnings using atomic counters, allowing concurrent
/// access from multiple tasks. All types are initialized to zero on creation.
///
/// # Thread Safety
///
/// This struct can be shared across tasks via `Arc`; a sequential crawl only
/// needs a shared reference.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }

        ProcessingStats { errors, warnings }
    }

    /// Increment an error counter.
    ///
    /// All error types are initialized in the constructor; a missing entry
    /// indicates a bug in initialization and is logged rather than panicking.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map.",
                error
            );
        }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map.",
                warning
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs a one-line-per-category summary of errors and warnings at the end of
/// a crawl. Categories with zero occurrences are skipped.
pub fn log_statistics(stats: &ProcessingStats) {
    if stats.total_errors() == 0 && stats.total_warnings() == 0 {
        log::info!("Crawl completed with no errors or warnings");
        return;
    }

    for error in ErrorType::iter() {
        let count = stats.get_error_count(error);
        if count > 0 {
            log::warn!("{:?}: {}", error, count);
        }
    }
    for warning in WarningType::iter() {
        let count = stats.get_warning_count(warning);
        if count > 0 {
            log::info!("{:?}: {}", warning, count);
        }
    }
}
