//! Minimal client for the Apify REST API (v2).
//!
//! Covers exactly what the export needs: start an actor run, wait for it to
//! finish, and page through its default dataset.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;
use url::Url;

use super::dataset::DatasetItems;
use super::types::{ActorRun, Envelope, ErrorEnvelope, RunInput};
use crate::config::{Config, DEFAULT_WAIT_SECS, MIN_POLL_INTERVAL_MS, RETRY_INITIAL_DELAY_MS};
use crate::error_handling::{get_retry_strategy, is_retriable, ApifyError, InitializationError};
use crate::initialization::init_client;

/// Client bound to one API token.
pub struct ApifyClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    wait_secs: u64,
    min_poll_interval: Duration,
    retry_initial_delay_ms: u64,
}

impl ApifyClient {
    /// Creates a client for `base_url` (e.g. `https://api.apify.com`).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        token: impl Into<String>,
    ) -> Result<Self, InitializationError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        Ok(Self {
            http,
            base_url,
            token: token.into(),
            wait_secs: DEFAULT_WAIT_SECS,
            min_poll_interval: Duration::from_millis(MIN_POLL_INTERVAL_MS),
            retry_initial_delay_ms: RETRY_INITIAL_DELAY_MS,
        })
    }

    /// Creates a client with the HTTP settings, endpoint, token and polling
    /// behavior from `config`.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = Self::new(init_client()?, &config.api_base_url, config.params.api_key())?;
        Ok(client
            .with_wait_secs(config.wait_secs)
            .with_min_poll_interval_ms(config.min_poll_interval_ms)
            .with_retry_initial_delay_ms(config.retry_initial_delay_ms))
    }

    pub fn with_wait_secs(mut self, wait_secs: u64) -> Self {
        self.wait_secs = wait_secs;
        self
    }

    /// Sets the minimum spacing between two status requests for one run.
    pub fn with_min_poll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.min_poll_interval = Duration::from_millis(interval_ms);
        self
    }

    pub fn with_retry_initial_delay_ms(mut self, delay_ms: u64) -> Self {
        self.retry_initial_delay_ms = delay_ms;
        self
    }

    /// Starts `actor_id` and blocks until the run is over.
    ///
    /// # Errors
    ///
    /// Any request failure, or `ApifyError::RunFailed` when the run ends
    /// `FAILED`, `TIMED-OUT` or `ABORTED`. A failed run is never re-submitted.
    pub async fn call_actor(
        &self,
        actor_id: &str,
        input: &RunInput,
    ) -> Result<ActorRun, ApifyError> {
        let run = self.start_run(actor_id, input).await?;
        info!("Started actor run {} ({})", run.id, run.status);

        let run = self.wait_for_run(run).await?;
        if !run.status.is_success() {
            return Err(ApifyError::RunFailed {
                run_id: run.id,
                status: run.status.to_string(),
            });
        }

        info!("Actor run {} finished: {}", run.id, run.status);
        Ok(run)
    }

    /// Starts a run of `actor_id` with `input`.
    ///
    /// `actor_id` may use either `user/name` or `user~name`. Not retried:
    /// a lost response could otherwise start the crawl twice.
    pub async fn start_run(&self, actor_id: &str, input: &RunInput) -> Result<ActorRun, ApifyError> {
        let actor = actor_id.replace('/', "~");
        let url = self.endpoint(&["v2", "acts", actor.as_str(), "runs"]);
        debug!("POST {}", url);

        let request = self.http.post(url).bearer_auth(&self.token).json(input);
        let envelope: Envelope<ActorRun> = Self::send(request).await?;
        Ok(envelope.data)
    }

    /// Polls `run` until it reaches a terminal status.
    ///
    /// Each request asks the server to hold the connection for up to
    /// `wait_secs`. A non-terminal answer that comes back sooner than the
    /// minimum poll interval is followed by a sleep for the remainder, so
    /// requests never go out faster than that. There is no overall deadline.
    pub async fn wait_for_run(&self, mut run: ActorRun) -> Result<ActorRun, ApifyError> {
        while !run.status.is_terminal() {
            let started = Instant::now();
            debug!(
                "Run {} is {}; waiting up to {}s",
                run.id, run.status, self.wait_secs
            );
            let mut url = self.endpoint(&["v2", "actor-runs", run.id.as_str()]);
            url.query_pairs_mut()
                .append_pair("waitForFinish", &self.wait_secs.to_string());

            let envelope: Envelope<ActorRun> = self.get_json(url).await?;
            run = envelope.data;

            if !run.status.is_terminal() {
                let elapsed = started.elapsed();
                if elapsed < self.min_poll_interval {
                    tokio::time::sleep(self.min_poll_interval - elapsed).await;
                }
            }
        }
        Ok(run)
    }

    /// Lazy pager over the items of `dataset_id`.
    pub fn dataset_items(&self, dataset_id: &str) -> DatasetItems<'_> {
        DatasetItems::new(self, dataset_id)
    }

    /// Builds `<base>/<segments...>`, escaping each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET with retries on transient failures.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApifyError> {
        let strategy = get_retry_strategy(self.retry_initial_delay_ms);
        RetryIf::spawn(
            strategy,
            || {
                debug!("GET {}", url);
                let request = self.http.get(url.clone()).bearer_auth(&self.token);
                Self::send::<T>(request)
            },
            |e: &ApifyError| {
                let retry = is_retriable(e);
                if retry {
                    warn!("Transient Apify error, retrying: {}", e);
                }
                retry
            },
        )
        .await
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApifyError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }
        Ok(response.json::<T>().await?)
    }
}

fn api_error(status: reqwest::StatusCode, body: &str) -> ApifyError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let kind = parsed
        .as_ref()
        .and_then(|e| e.error.kind.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let message = parsed
        .and_then(|e| e.error.message)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("no message").to_string()
            } else {
                trimmed.to_string()
            }
        });

    ApifyError::Api {
        status: status.as_u16(),
        kind,
        message,
    }
}
