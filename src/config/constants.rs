//! Configuration constants.
//!
//! Defaults for the Apify endpoints, export destination, polling, and retry
//! behavior used throughout the application.

/// Apify actor that crawls Google Maps places.
pub const DEFAULT_ACTOR_ID: &str = "drobnikj/crawler-google-places";

/// Base URL of the Apify REST API (the `/v2` prefix is added per request).
pub const DEFAULT_API_BASE_URL: &str = "https://api.apify.com";

/// Export destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "main.tsv";

/// Environment variable holding the Apify API token.
pub const APIFY_TOKEN_ENV: &str = "APIFY_TOKEN";

/// Server-side long-poll window for a single run status request, in seconds.
///
/// The platform holds the request open until the run finishes or this many
/// seconds pass; the client simply asks again. There is no client-side
/// deadline on the run as a whole.
pub const DEFAULT_WAIT_SECS: u64 = 60;

/// Largest `waitForFinish` window the platform honors, in seconds.
pub const MAX_WAIT_SECS: u64 = 60;

/// Minimum spacing between two run status requests, in milliseconds.
///
/// Applies when the server answers a status request with a non-terminal run
/// before this much time has passed.
pub const MIN_POLL_INTERVAL_MS: u64 = 1000;

/// Number of dataset items requested per page.
pub const DATASET_PAGE_LIMIT: usize = 1000;

// Retry strategy (idempotent GET requests only)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 1000;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 20;
/// Maximum number of attempts (initial + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 5;

/// Connection timeout for requests to the Apify API.
///
/// Only the connect phase is bounded; a status request legitimately stays
/// open for up to `wait_secs`.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP status the platform uses for rate limiting; retried like a 5xx.
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
