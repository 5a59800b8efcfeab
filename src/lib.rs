//! gmaps_apify library: Google Maps business export through Apify
//!
//! Runs the Apify Google Maps crawler actor for a set of search terms, waits
//! for the run to finish, and writes every business that is not permanently
//! closed to a tab-separated file.
//!
//! # Example
//!
//! ```no_run
//! use gmaps_apify::{run_export, Config, SearchParams};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = SearchParams::new("apify_api_xxx", "coffee restaurant", "pittsburgh", 20)?;
//! let report = run_export(Config::new(params)).await?;
//! println!("Wrote {} businesses to {}", report.rows_written, report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The binary uses a single-threaded
//! one; nothing here spawns tasks.

pub mod apify;
pub mod config;
mod error_handling;
pub mod export;
pub mod form;
pub mod initialization;
pub mod models;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel, SearchParams};
pub use error_handling::{ApifyError, InitializationError, InputError};
pub use models::{BusinessRecord, ExportRow, OpeningHours};
pub use run::{run_export, ExportReport};

// Internal run module (contains the orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::apify::{ApifyClient, RunInput};
    use crate::config::Config;
    use crate::export::TsvExporter;

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Apify run identifier
        pub run_id: String,
        /// Dataset the rows were read from
        pub dataset_id: String,
        /// File the rows were written to
        pub output: PathBuf,
        /// Records read from the dataset
        pub records_seen: usize,
        /// Rows written (open businesses)
        pub rows_written: usize,
        /// Records skipped as permanently closed
        pub skipped_closed: usize,
        /// Elapsed time in seconds, crawl included
        pub elapsed_seconds: f64,
    }

    /// Runs the crawler and exports its results.
    ///
    /// Blocks (asynchronously) until the actor run finishes, then streams the
    /// dataset page by page into `config.output`. The output file is only
    /// created once the run has succeeded, so a failed run leaves any
    /// previous export untouched.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The Apify client cannot be built (bad base URL)
    /// - The run cannot be started, polled, or ends unsuccessfully
    /// - A dataset page cannot be fetched or decoded
    /// - The output file cannot be created or written
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let start_time = Instant::now();

        let client =
            ApifyClient::from_config(&config).context("Failed to initialize Apify client")?;
        let input = RunInput::from(&config.params);

        info!(
            "Searching {:?} in {:?} (up to {} places per search) with {}",
            input.search_strings_array,
            config.params.city(),
            input.max_crawled_places_per_search,
            config.actor_id
        );
        info!("Might take a while to finish ~");

        let run = client
            .call_actor(&config.actor_id, &input)
            .await
            .context("Actor run did not succeed")?;

        let mut exporter = TsvExporter::create(&config.output)?;
        let mut items = client.dataset_items(&run.default_dataset_id);

        while let Some(page) = items
            .next_page()
            .await
            .with_context(|| format!("Failed to read dataset {}", run.default_dataset_id))?
        {
            for record in &page {
                exporter.write_record(record)?;
            }
            debug!(
                "Exported {} rows from {} records so far",
                exporter.stats().rows_written,
                items.offset()
            );
        }

        let stats = exporter.finish()?;
        info!(
            "Wrote {} rows to {} ({} permanently closed skipped)",
            stats.rows_written,
            config.output.display(),
            stats.skipped_closed
        );

        Ok(ExportReport {
            run_id: run.id,
            dataset_id: run.default_dataset_id,
            output: config.output,
            records_seen: stats.records_seen,
            rows_written: stats.rows_written,
            skipped_closed: stats.skipped_closed,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
