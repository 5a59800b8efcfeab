//! Export types.

/// Column headers of the exported TSV, in order.
pub const EXPORT_HEADER: [&str; 5] = ["Name", "Address", "Opening Hours", "Phone Number", "Website"];

/// Counters for one export pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Records read from the dataset
    pub records_seen: usize,
    /// Rows written to the file (header excluded)
    pub rows_written: usize,
    /// Records dropped because the business is permanently closed
    pub skipped_closed: usize,
}
