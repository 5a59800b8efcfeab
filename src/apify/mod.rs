//! Apify platform access.
//!
//! This module provides:
//! - The actor input and run payloads
//! - A client that starts a run and waits for it to finish
//! - A lazy pager over the run's dataset

mod client;
mod dataset;
mod types;

pub use client::ApifyClient;
pub use dataset::DatasetItems;
pub use types::{ActorRun, ProxyConfig, RunInput, RunStatus};
