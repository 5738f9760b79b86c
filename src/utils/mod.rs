//! Shared utilities.

mod selector;

// Re-export public API
pub use selector::parse_selector_unsafe;
