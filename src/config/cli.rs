//! Command-line flag adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{
    APIFY_TOKEN_ENV, DEFAULT_ACTOR_ID, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_PATH,
    DEFAULT_WAIT_SECS, MAX_WAIT_SECS, MIN_POLL_INTERVAL_MS, RETRY_INITIAL_DELAY_MS,
};
use crate::config::types::{Config, LogFormat, LogLevel, SearchParams};
use crate::error_handling::InputError;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Key from APIFY_TOKEN (or .env)
/// gmaps_apify --search "coffee restaurant" --city pittsburgh --max_results 20
///
/// # Explicit key and output file
/// gmaps_apify --apify_key apify_api_xxx --search bakery --city erie --max_results 5 --output erie.tsv
/// ```
///
/// Started without any arguments, the binary opens the interactive form instead.
#[derive(Debug, Parser)]
#[command(
    name = "gmaps_apify",
    about = "Runs the Apify Google Maps crawler and exports open businesses to a TSV file."
)]
pub struct Cli {
    /// APIFY key (console.apify.com, Settings > Integrations)
    #[arg(long = "apify_key", visible_alias = "apify-key", env = APIFY_TOKEN_ENV, hide_env_values = true)]
    pub apify_key: String,

    /// Search terms, space separated. Example: coffee restaurant
    #[arg(long)]
    pub search: String,

    /// City to search in. Example: pittsburgh
    #[arg(long)]
    pub city: String,

    /// Maximum results to search (the crawler sometimes returns more)
    #[arg(
        long = "max_results",
        visible_alias = "max-results",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_results: u32,

    /// Output TSV file (overwritten on every run)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Apify actor to run
    #[arg(long, default_value = DEFAULT_ACTOR_ID)]
    pub actor: String,

    /// Apify API base URL
    #[arg(long, default_value = DEFAULT_API_BASE_URL, hide = true)]
    pub api_base_url: String,

    /// Seconds the server may hold each run status request open (1-60)
    #[arg(
        long,
        default_value_t = DEFAULT_WAIT_SECS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_WAIT_SECS)
    )]
    pub wait_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Validates the parsed flags into a library [`Config`].
    pub fn into_config(self) -> Result<Config, InputError> {
        let params = SearchParams::new(self.apify_key, self.search, self.city, self.max_results)?;
        Ok(Config {
            params,
            output: self.output,
            actor_id: self.actor,
            api_base_url: self.api_base_url,
            wait_secs: self.wait_secs,
            min_poll_interval_ms: MIN_POLL_INTERVAL_MS,
            retry_initial_delay_ms: RETRY_INITIAL_DELAY_MS,
            log_level: self.log_level,
            log_format: self.log_format,
        })
    }
}
