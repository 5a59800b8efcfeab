//! Error handling.
//!
//! This module provides:
//! - Error type definitions for input, initialization, and Apify failures
//! - Retry strategy configuration
//! - Retriability checks for Apify request errors
//!
//! Nothing here translates errors into exit codes beyond "input error" and
//! "everything else"; both propagate to `main`.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{get_retry_strategy, is_retriable};
pub use types::{ApifyError, InitializationError, InputError};
