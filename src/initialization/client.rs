//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::CONNECT_TIMEOUT_SECS;

/// Initializes the HTTP client used for every Apify request.
///
/// Only the connect phase has a timeout. Run status requests are long polls
/// that the server holds open, and the run itself may take as long as the
/// crawl takes, so no overall request timeout is set.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
