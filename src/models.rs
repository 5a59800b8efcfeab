//! Records flowing from the crawler's dataset to the TSV file.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One business as the Google Maps crawler reports it.
///
/// Only the fields the export uses are declared; everything else in the
/// dataset item is ignored. Any of them may be missing or `null`, and text
/// cells accept any JSON scalar so one odd item cannot fail a whole page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(default, deserialize_with = "text_cell")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub permanently_closed: bool,
    pub opening_hours: Option<Vec<OpeningHours>>,
}

impl BusinessRecord {
    pub fn is_permanently_closed(&self) -> bool {
        self.permanently_closed
    }
}

/// One day's opening hours, e.g. `{"day": "Monday", "hours": "9 AM to 5 PM"}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OpeningHours {
    #[serde(default, deserialize_with = "text_cell")]
    pub day: Option<String>,
    #[serde(default, deserialize_with = "text_cell")]
    pub hours: Option<String>,
}

/// Renders any JSON value as cell text. Strings are kept verbatim, `null`
/// is absent, anything else is written in its JSON form.
fn text_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

/// A business flattened into the five exported columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    pub phone: String,
    pub website: String,
}

impl ExportRow {
    /// Cells in header order.
    pub fn as_record(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.opening_hours.as_str(),
            self.phone.as_str(),
            self.website.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let item = serde_json::json!({
            "title": "Commonplace Coffee",
            "street": "5827 Forbes Ave",
            "city": "Pittsburgh",
            "state": "Pennsylvania",
            "phone": "(412) 555-0100",
            "website": "https://example.com",
            "permanentlyClosed": false,
            "openingHours": [{"day": "Monday", "hours": "7 AM to 6 PM"}],
            "totalScore": 4.6,
            "placeId": "ChIJ"
        });
        let record: BusinessRecord = serde_json::from_value(item).unwrap();
        assert_eq!(record.title.as_deref(), Some("Commonplace Coffee"));
        assert!(!record.permanently_closed);
        assert_eq!(
            record.opening_hours,
            Some(vec![OpeningHours {
                day: Some("Monday".to_string()),
                hours: Some("7 AM to 6 PM".to_string()),
            }])
        );
    }

    #[test]
    fn test_deserialize_sparse_item() {
        let record: BusinessRecord =
            serde_json::from_value(serde_json::json!({"title": "X", "phone": null})).unwrap();
        assert_eq!(record.title.as_deref(), Some("X"));
        assert!(record.phone.is_none());
        assert!(record.opening_hours.is_none());
        assert!(!record.is_permanently_closed());
    }

    #[test]
    fn test_permanently_closed_flag() {
        let record = BusinessRecord {
            permanently_closed: true,
            ..Default::default()
        };
        assert!(record.is_permanently_closed());
    }

    #[test]
    fn test_permanently_closed_uses_truthiness() {
        let closed = |flag: serde_json::Value| {
            serde_json::from_value::<BusinessRecord>(serde_json::json!({"permanentlyClosed": flag}))
                .unwrap()
                .is_permanently_closed()
        };
        assert!(!closed(serde_json::json!(0)));
        assert!(!closed(serde_json::json!("")));
        assert!(!closed(serde_json::json!(null)));
        assert!(!closed(serde_json::json!(false)));
        assert!(closed(serde_json::json!(1)));
        assert!(closed(serde_json::json!("yes")));
        assert!(closed(serde_json::json!(true)));
    }

    #[test]
    fn test_non_string_cells_are_rendered_as_text() {
        let record: BusinessRecord = serde_json::from_value(serde_json::json!({
            "title": 42,
            "phone": 4125550100u64,
            "website": true,
            "openingHours": [{"day": "Monday", "hours": 24}]
        }))
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("42"));
        assert_eq!(record.phone.as_deref(), Some("4125550100"));
        assert_eq!(record.website.as_deref(), Some("true"));
        assert_eq!(
            record.opening_hours.unwrap()[0].hours.as_deref(),
            Some("24")
        );
    }
}
