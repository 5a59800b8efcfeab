//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `gmaps_apify` library that handles:
//! - Environment variable loading (.env file)
//! - Choosing between the interactive form and command-line flags
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, IsTerminal};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use gmaps_apify::config::APIFY_TOKEN_ENV;
use gmaps_apify::form::Form;
use gmaps_apify::initialization::init_logger_with;
use gmaps_apify::{run_export, Cli, Config, InputError};

/// Exit code for invalid input, matching clap's usage errors.
const EXIT_INPUT_ERROR: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env in the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = match collect_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gmaps_apify: {e}");
            process::exit(EXIT_INPUT_ERROR);
        }
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            println!(
                "✅ Exported {} business{} ({} permanently closed skipped) in {:.1}s",
                report.rows_written,
                if report.rows_written == 1 { "" } else { "es" },
                report.skipped_closed,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("gmaps_apify error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Opens the form when started bare on a terminal, otherwise parses flags.
fn collect_config() -> Result<Config, InputError> {
    let bare = std::env::args_os().len() <= 1;
    if bare && io::stdin().is_terminal() {
        let params = Form::new(io::stdin().lock(), io::stdout())
            .with_key_fallback(std::env::var(APIFY_TOKEN_ENV).ok())
            .collect()?;
        return Ok(Config::new(params));
    }

    Cli::parse().into_config()
}
