//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, polling, retry policy)
//! - The validated search parameter set and library configuration
//! - The command-line flag adapter

mod cli;
mod constants;
mod types;

pub use cli::Cli;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, SearchParams};
