//! Export of crawler results to TSV.
//!
//! This module turns `BusinessRecord`s into five-column rows and streams
//! them into a tab-separated file.

mod row;
mod tsv;
mod types;

pub use row::{format_address, format_opening_hours};
pub use tsv::TsvExporter;
pub use types::{ExportStats, EXPORT_HEADER};
