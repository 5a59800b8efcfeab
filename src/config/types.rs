//! Configuration types.
//!
//! `SearchParams` is the single parameter set both presentation modes (flags
//! and the interactive form) produce. `Config` wraps it with the library
//! settings and has no CLI dependency.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ACTOR_ID, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_PATH, DEFAULT_WAIT_SECS,
    MIN_POLL_INTERVAL_MS, RETRY_INITIAL_DELAY_MS,
};
use crate::error_handling::InputError;

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

/// Validated search parameters.
///
/// Construct through [`SearchParams::new`]; the fields are only readable so a
/// value of this type is always valid.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchParams {
    api_key: String,
    search: String,
    city: String,
    max_results: u32,
}

impl SearchParams {
    /// Validates and builds a parameter set.
    ///
    /// The API key is trimmed. The city is not checked at all: whatever the
    /// user typed is forwarded to the crawler, which decides what it means.
    ///
    /// # Errors
    ///
    /// - `InputError::MissingApiKey` if the key is blank
    /// - `InputError::MissingSearch` if the search string has no terms
    /// - `InputError::InvalidMaxResults` if `max_results` is zero
    pub fn new(
        api_key: impl Into<String>,
        search: impl Into<String>,
        city: impl Into<String>,
        max_results: u32,
    ) -> Result<Self, InputError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(InputError::MissingApiKey);
        }

        let search = search.into();
        if search.split_whitespace().next().is_none() {
            return Err(InputError::MissingSearch);
        }

        if max_results == 0 {
            return Err(InputError::InvalidMaxResults(max_results.to_string()));
        }

        Ok(Self {
            api_key,
            search,
            city: city.into(),
            max_results,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Search string split on whitespace, one entry per keyword group.
    pub fn search_terms(&self) -> Vec<String> {
        self.search.split_whitespace().map(str::to_string).collect()
    }
}

impl fmt::Debug for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchParams")
            .field("api_key", &"<redacted>")
            .field("search", &self.search)
            .field("city", &self.city)
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use gmaps_apify::{Config, SearchParams};
/// use std::path::PathBuf;
///
/// let params = SearchParams::new("apify_api_xxx", "coffee restaurant", "pittsburgh", 20)?;
/// let config = Config {
///     output: PathBuf::from("coffee.tsv"),
///     ..Config::new(params)
/// };
/// # Ok::<(), gmaps_apify::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// What to search for
    pub params: SearchParams,

    /// TSV destination (truncated on every run)
    pub output: PathBuf,

    /// Apify actor to run, in `user/name` form
    pub actor_id: String,

    /// Apify API base URL
    pub api_base_url: String,

    /// Long-poll window per run status request, in seconds
    pub wait_secs: u64,

    /// Minimum spacing between run status requests, in milliseconds
    pub min_poll_interval_ms: u64,

    /// First retry delay for transient failures on GET requests
    pub retry_initial_delay_ms: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Builds a configuration with default settings around `params`.
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            actor_id: DEFAULT_ACTOR_ID.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            wait_secs: DEFAULT_WAIT_SECS,
            min_poll_interval_ms: MIN_POLL_INTERVAL_MS,
            retry_initial_delay_ms: RETRY_INITIAL_DELAY_MS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
