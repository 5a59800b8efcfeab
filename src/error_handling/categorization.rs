//! Retry strategy and error retriability.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::ApifyError;
use crate::config::{
    HTTP_STATUS_TOO_MANY_REQUESTS, RETRY_FACTOR, RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY_SECS,
};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `initial_delay_ms` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `RETRY_MAX_ATTEMPTS` attempts in total (initial + retries)
pub fn get_retry_strategy(initial_delay_ms: u64) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(initial_delay_ms)
        .factor(RETRY_FACTOR)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(RETRY_MAX_ATTEMPTS.saturating_sub(1))
}

/// Determines if an Apify request error is transient.
///
/// # Retriable Errors
///
/// - Network timeouts and connection failures
/// - Server errors (5xx HTTP status codes)
/// - Rate limiting (429 Too Many Requests)
///
/// # Non-Retriable Errors
///
/// - Client errors (4xx except 429): bad token, exhausted quota, unknown actor
/// - Body decode errors
/// - Failed runs: the crawl is never re-submitted from here
pub fn is_retriable(error: &ApifyError) -> bool {
    match error {
        ApifyError::Http(e) => {
            if let Some(status) = e.status() {
                return status_is_retriable(status.as_u16());
            }
            e.is_timeout() || e.is_connect() || e.is_request()
        }
        ApifyError::Api { status, .. } => status_is_retriable(*status),
        ApifyError::RunFailed { .. } => false,
    }
}

fn status_is_retriable(status: u16) -> bool {
    status == HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(&status)
}
