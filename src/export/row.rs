//! Flattening a `BusinessRecord` into the exported columns.

use crate::models::{BusinessRecord, ExportRow, OpeningHours};

impl ExportRow {
    /// Builds the exported row for `record`.
    ///
    /// Returns `None` for permanently closed businesses.
    pub fn from_record(record: &BusinessRecord) -> Option<Self> {
        if record.is_permanently_closed() {
            return None;
        }

        Some(Self {
            name: record.title.clone().unwrap_or_default(),
            address: format_address(
                record.street.as_deref(),
                record.city.as_deref(),
                record.state.as_deref(),
            ),
            opening_hours: format_opening_hours(record.opening_hours.as_deref()),
            phone: record.phone.clone().unwrap_or_default(),
            website: record.website.clone().unwrap_or_default(),
        })
    }
}

/// Joins street, city and state with single spaces.
///
/// A missing or empty part is replaced by a single space before joining, so
/// a gap in the middle widens the separator instead of collapsing it. The
/// result is trimmed at both ends.
pub fn format_address(street: Option<&str>, city: Option<&str>, state: Option<&str>) -> String {
    let part = |p: Option<&str>| match p {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => " ".to_string(),
    };

    [part(street), part(city), part(state)]
        .join(" ")
        .trim()
        .to_string()
}

/// One `"<day> <hours>"` line per entry; empty when there are no entries.
pub fn format_opening_hours(hours: Option<&[OpeningHours]>) -> String {
    hours
        .unwrap_or_default()
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                entry.day.as_deref().unwrap_or_default(),
                entry.hours.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
