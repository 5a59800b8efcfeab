// Shared test helpers: a mock Apify API and test configurations.
//
// Each test binary uses a different subset.
#![allow(dead_code)]

use std::path::Path;

use gmaps_apify::{Config, SearchParams};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "apify_api_test";
pub const RUN_ID: &str = "run123";
pub const DATASET_ID: &str = "ds123";
pub const RUNS_PATH: &str = "/v2/acts/drobnikj~crawler-google-places/runs";

/// Config pointed at `server`, writing to `output`, with a short polling
/// floor and near-instant retries.
pub fn test_config(server: &MockServer, output: &Path) -> Config {
    let params = SearchParams::new(TEST_KEY, "coffee restaurant", "pittsburgh", 5)
        .expect("valid test params");
    Config {
        output: output.to_path_buf(),
        api_base_url: server.uri(),
        wait_secs: 0,
        min_poll_interval_ms: 5,
        retry_initial_delay_ms: 1,
        ..Config::new(params)
    }
}

pub fn run_body(status: &str) -> Value {
    json!({
        "data": {
            "id": RUN_ID,
            "actId": "nwua9Gu5YrADL7ZDj",
            "status": status,
            "defaultDatasetId": DATASET_ID
        }
    })
}

/// Start endpoint answering with a RUNNING run.
pub async fn mount_start_run(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(RUNS_PATH))
        .and(header("authorization", format!("Bearer {TEST_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(run_body("RUNNING")))
        .expect(1)
        .mount(server)
        .await;
}

/// Status endpoint reporting `statuses` in order; the last one repeats.
pub async fn mount_run_statuses(server: &MockServer, statuses: &[&str]) {
    let run_path = format!("/v2/actor-runs/{RUN_ID}");
    let (last, earlier) = statuses.split_last().expect("at least one status");
    for status in earlier {
        Mock::given(method("GET"))
            .and(path(run_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(run_body(status)))
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(run_path.as_str()))
        .and(query_param("waitForFinish", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_body(last)))
        .mount(server)
        .await;
}

/// Dataset endpoint returning `items` as the first (and only) page.
pub async fn mount_dataset(server: &MockServer, items: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/datasets/{DATASET_ID}/items").as_str()))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(server)
        .await;
}

pub fn open_business(title: &str) -> Value {
    json!({
        "title": title,
        "street": "5827 Forbes Ave",
        "city": "Pittsburgh",
        "state": "Pennsylvania",
        "phone": "(412) 555-0100",
        "website": format!("https://{}.example.com", title.to_lowercase()),
        "permanentlyClosed": false,
        "openingHours": [
            {"day": "Monday", "hours": "7 AM to 6 PM"},
            {"day": "Tuesday", "hours": "7 AM to 6 PM"}
        ]
    })
}

pub fn closed_business(title: &str) -> Value {
    let mut item = open_business(title);
    item["permanentlyClosed"] = json!(true);
    item
}

/// Parses a TSV export into rows of cells (header included).
pub fn read_tsv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open TSV output");
    reader
        .records()
        .map(|r| {
            r.expect("Failed to parse TSV row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
