//! Apify API payloads.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::SearchParams;

/// Input for the Google Maps crawler actor.
///
/// Images and reviews are never collected, results are requested in English
/// with opening hours, and requests go through the Apify proxy pool. Only the
/// result cap, the search strings and the location vary per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    pub max_images: u32,
    pub max_reviews: u32,
    pub language: String,
    pub include_opening_hours: bool,
    pub max_crawled_places_per_search: u32,
    pub proxy_config: ProxyConfig,
    pub search_strings_array: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    pub use_apify_proxy: bool,
}

impl From<&SearchParams> for RunInput {
    fn from(params: &SearchParams) -> Self {
        let city = params.city().trim();
        Self {
            max_images: 0,
            max_reviews: 0,
            language: "en".to_string(),
            include_opening_hours: true,
            max_crawled_places_per_search: params.max_results(),
            proxy_config: ProxyConfig {
                use_apify_proxy: true,
            },
            search_strings_array: params.search_terms(),
            location_query: (!city.is_empty()).then(|| city.to_string()),
        }
    }
}

/// Lifecycle state of an actor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum RunStatus {
    #[serde(rename = "READY")]
    #[strum(serialize = "READY")]
    Ready,
    #[serde(rename = "RUNNING")]
    #[strum(serialize = "RUNNING")]
    Running,
    #[serde(rename = "SUCCEEDED")]
    #[strum(serialize = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "FAILED")]
    #[strum(serialize = "FAILED")]
    Failed,
    #[serde(rename = "TIMING-OUT")]
    #[strum(serialize = "TIMING-OUT")]
    TimingOut,
    #[serde(rename = "TIMED-OUT")]
    #[strum(serialize = "TIMED-OUT")]
    TimedOut,
    #[serde(rename = "ABORTING")]
    #[strum(serialize = "ABORTING")]
    Aborting,
    #[serde(rename = "ABORTED")]
    #[strum(serialize = "ABORTED")]
    Aborted,
    /// A status this client does not know; treated as still in progress.
    #[serde(other)]
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl RunStatus {
    /// Whether the run has stopped for good.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Succeeded | RunStatus::Failed | RunStatus::TimedOut | RunStatus::Aborted
        )
    }

    pub fn is_success(self) -> bool {
        self == RunStatus::Succeeded
    }
}

/// The part of an actor run object this client reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRun {
    pub id: String,
    pub status: RunStatus,
    pub default_dataset_id: String,
}

/// Single-object responses are wrapped in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Error body: `{"error": {"type": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_run_input_fixed_policy_fields() {
        let params = SearchParams::new("key", "coffee restaurant", "pittsburgh", 25).unwrap();
        let value = serde_json::to_value(RunInput::from(&params)).unwrap();
        assert_eq!(
            value,
            json!({
                "maxImages": 0,
                "maxReviews": 0,
                "language": "en",
                "includeOpeningHours": true,
                "maxCrawledPlacesPerSearch": 25,
                "proxyConfig": { "useApifyProxy": true },
                "searchStringsArray": ["coffee", "restaurant"],
                "locationQuery": "pittsburgh"
            })
        );
    }

    #[test]
    fn test_run_input_omits_blank_city() {
        let params = SearchParams::new("key", "bakery", "  ", 3).unwrap();
        let value = serde_json::to_value(RunInput::from(&params)).unwrap();
        assert!(value.get("locationQuery").is_none());
        assert_eq!(value["searchStringsArray"], json!(["bakery"]));
    }

    #[test]
    fn test_run_status_parsing() {
        let status: RunStatus = serde_json::from_value(json!("TIMED-OUT")).unwrap();
        assert_eq!(status, RunStatus::TimedOut);
        let status: RunStatus = serde_json::from_value(json!("SOMETHING-NEW")).unwrap();
        assert_eq!(status, RunStatus::Unknown);
    }

    #[test]
    fn test_run_status_terminal_states() {
        let terminal: Vec<RunStatus> = RunStatus::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(
            terminal,
            vec![
                RunStatus::Succeeded,
                RunStatus::Failed,
                RunStatus::TimedOut,
                RunStatus::Aborted
            ]
        );
        assert!(RunStatus::iter()
            .filter(|s| s.is_success())
            .eq([RunStatus::Succeeded]));
    }

    #[test]
    fn test_run_status_display_matches_wire_name() {
        assert_eq!(RunStatus::TimingOut.to_string(), "TIMING-OUT");
        assert_eq!(RunStatus::Succeeded.to_string(), "SUCCEEDED");
    }

    #[test]
    fn test_actor_run_from_envelope() {
        let body = json!({
            "data": {
                "id": "HG7ML7M8z78YcAPEB",
                "actId": "nwua9Gu5YrADL7ZDj",
                "status": "RUNNING",
                "defaultDatasetId": "wmKPijuyDnPZAPRMk"
            }
        });
        let run: Envelope<ActorRun> = serde_json::from_value(body).unwrap();
        assert_eq!(run.data.id, "HG7ML7M8z78YcAPEB");
        assert_eq!(run.data.status, RunStatus::Running);
        assert_eq!(run.data.default_dataset_id, "wmKPijuyDnPZAPRMk");
    }
}
