//! TSV writer for exported businesses.
//!
//! Output is UTF-8, tab-delimited, one header row followed by one row per
//! open business. Cells that contain a tab, quote or line break (the
//! Opening Hours column usually does) are quoted; nothing else is.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use super::types::{ExportStats, EXPORT_HEADER};
use crate::models::{BusinessRecord, ExportRow};

/// Streams records into a TSV destination.
///
/// The header is written on construction, so even a run that yields no
/// records leaves a valid file behind.
pub struct TsvExporter<W: Write> {
    writer: Writer<W>,
    stats: ExportStats,
}

impl TsvExporter<File> {
    /// Creates (or truncates) `path` and writes the header.
    ///
    /// Rows go straight to the destination; an interrupted run leaves a
    /// partial file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> TsvExporter<W> {
    /// Wraps `inner` and writes the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(inner);

        writer
            .write_record(EXPORT_HEADER)
            .context("Failed to write TSV header")?;

        Ok(Self {
            writer,
            stats: ExportStats::default(),
        })
    }

    /// Writes `record` unless it is permanently closed.
    ///
    /// Returns whether a row was written.
    pub fn write_record(&mut self, record: &BusinessRecord) -> Result<bool> {
        self.stats.records_seen += 1;

        let Some(row) = ExportRow::from_record(record) else {
            self.stats.skipped_closed += 1;
            log::debug!(
                "Skipping permanently closed business: {}",
                record.title.as_deref().unwrap_or("<untitled>")
            );
            return Ok(false);
        };

        self.writer
            .write_record(row.as_record())
            .context("Failed to write TSV row")?;
        self.stats.rows_written += 1;
        Ok(true)
    }

    pub fn stats(&self) -> ExportStats {
        self.stats
    }

    /// Flushes buffered rows and returns the final counters.
    pub fn finish(mut self) -> Result<ExportStats> {
        self.writer.flush().context("Failed to flush TSV output")?;
        Ok(self.stats)
    }
}
