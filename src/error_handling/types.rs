//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL does not parse.
    #[error("Invalid API base URL: {0}")]
    BaseUrlError(#[from] url::ParseError),
}

/// Invalid or missing user input, reported before anything is sent to Apify.
#[derive(Error, Debug)]
pub enum InputError {
    /// The API key is empty.
    #[error("APIFY key is required")]
    MissingApiKey,

    /// The search string has no terms.
    #[error("search terms are required (example: coffee restaurant)")]
    MissingSearch,

    /// Max results is not a positive integer.
    #[error("max results must be a positive integer, got {0:?}")]
    InvalidMaxResults(String),

    /// Input ended before every field was answered.
    #[error("input ended before all parameters were entered")]
    Aborted,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors talking to the Apify platform.
#[derive(Error, Debug)]
pub enum ApifyError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("request to Apify failed: {0}")]
    Http(#[from] ReqwestError),

    /// The API answered with a non-success status.
    #[error("Apify API returned {status} ({kind}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error type reported by the platform, e.g. `user-or-token-not-found`
        kind: String,
        /// Human-readable message reported by the platform
        message: String,
    },

    /// The actor run ended in a terminal state other than success.
    #[error("actor run {run_id} finished with status {status}")]
    RunFailed {
        /// Run identifier
        run_id: String,
        /// Terminal status reported by the platform
        status: String,
    },
}

impl ApifyError {
    /// HTTP status code of the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApifyError::Http(e) => e.status().map(|s| s.as_u16()),
            ApifyError::Api { status, .. } => Some(*status),
            ApifyError::RunFailed { .. } => None,
        }
    }
}
