//! Fetch and fan-out tests with wiremock standing in for the World Bank API.

use pretty_assertions::assert_eq;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tunisia_macro_dashboard::config::{AppConfig, Indicator, IndicatorCatalog};
use tunisia_macro_dashboard::models::{Sample, YearWindow};
use tunisia_macro_dashboard::services::dashboard::compose_dashboard;
use tunisia_macro_dashboard::services::worldbank::{fetch_series, FetchError};

fn test_config(api_base: String) -> AppConfig {
    AppConfig {
        api_base,
        country: "TUN".to_string(),
        window_years: 10,
        freshness_secs: 86_400,
    }
}

fn sample(year: &str, value: f64) -> Sample {
    Sample { year: year.to_string(), value }
}

/// Catalog of bare test indicators; display metadata is irrelevant here.
fn test_catalog(entries: &[(&str, &str)]) -> IndicatorCatalog {
    IndicatorCatalog::new(
        entries
            .iter()
            .map(|(key, code)| Indicator {
                key: key.to_string(),
                code: code.to_string(),
                name: key.to_string(),
                description: String::new(),
                color: "#8884d8".to_string(),
            })
            .collect(),
    )
}

async fn mount_series(server: &MockServer, code: &str, observations: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/TUN/indicator/{}", code)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, observations])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_normalizes_the_upstream_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/TUN/indicator/NY.GDP.MKTP.CD"))
        .and(query_param("format", "json"))
        .and(query_param("date", "2019:2020"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {},
            [{"date": "2020", "value": 5.5}, {"date": "2019", "value": null}]
        ])))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let series = fetch_series(
        &Client::new(),
        &config,
        "NY.GDP.MKTP.CD",
        YearWindow { start: 2019, end: 2020 },
    )
    .await
    .unwrap();

    assert_eq!(series, vec![sample("2019", 0.0), sample("2020", 5.5)]);
}

#[tokio::test]
async fn single_year_window_requests_a_single_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/TUN/indicator/SP.POP.TOTL"))
        .and(query_param("date", "2020:2020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"total": 0}, []])))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let series = fetch_series(
        &Client::new(),
        &config,
        "SP.POP.TOTL",
        YearWindow { start: 2020, end: 2020 },
    )
    .await
    .unwrap();

    // Empty upstream window is an empty series, not an error.
    assert!(series.is_empty());
}

#[tokio::test]
async fn non_success_status_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let err = fetch_series(
        &Client::new(),
        &config,
        "FP.CPI.TOTL.ZG",
        YearWindow { start: 2015, end: 2025 },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FetchError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn unreachable_upstream_is_upstream_unavailable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    // Shutting the server down leaves nothing listening on the port.
    drop(server);

    let config = test_config(uri);
    let err = fetch_series(
        &Client::new(),
        &config,
        "FP.CPI.TOTL.ZG",
        YearWindow { start: 2015, end: 2025 },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FetchError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn error_reply_envelope_is_malformed_response() {
    let server = MockServer::start().await;
    // The World Bank signals bad requests with a 200 and a one-element body.
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"message": [{"id": "120"}]}])),
        )
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let err = fetch_series(
        &Client::new(),
        &config,
        "BAD.CODE",
        YearWindow { start: 2015, end: 2025 },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse(_)));
}

#[tokio::test]
async fn compose_returns_one_series_per_catalog_key() {
    let server = MockServer::start().await;
    mount_series(&server, "A.ONE", json!([{"date": "2020", "value": 1.0}])).await;
    mount_series(&server, "B.TWO", json!([{"date": "2020", "value": 2.0}])).await;
    mount_series(&server, "C.THREE", json!([{"date": "2020", "value": null}])).await;

    let config = test_config(server.uri());
    let catalog = test_catalog(&[("alpha", "A.ONE"), ("beta", "B.TWO"), ("gamma", "C.THREE")]);

    let dataset = compose_dashboard(
        &Client::new(),
        &config,
        &catalog,
        YearWindow { start: 2020, end: 2020 },
    )
    .await
    .unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset["alpha"], vec![sample("2020", 1.0)]);
    assert_eq!(dataset["beta"], vec![sample("2020", 2.0)]);
    assert_eq!(dataset["gamma"], vec![sample("2020", 0.0)]);
}

#[tokio::test]
async fn compose_fails_as_a_whole_naming_the_failed_key() {
    let server = MockServer::start().await;
    mount_series(&server, "A.ONE", json!([{"date": "2020", "value": 1.0}])).await;
    Mock::given(method("GET"))
        .and(path("/TUN/indicator/B.TWO"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_series(&server, "C.THREE", json!([{"date": "2020", "value": 3.0}])).await;

    let config = test_config(server.uri());
    let catalog = test_catalog(&[("alpha", "A.ONE"), ("beta", "B.TWO"), ("gamma", "C.THREE")]);

    let err = compose_dashboard(
        &Client::new(),
        &config,
        &catalog,
        YearWindow { start: 2020, end: 2020 },
    )
    .await
    .unwrap_err();

    // No partial mapping: the only outcome is the error, and it names the key.
    assert_eq!(err.failed_keys, vec!["beta".to_string()]);
    assert!(err.to_string().contains("beta"));
}
