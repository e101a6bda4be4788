// src/services/worldbank.rs
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{Sample, Series, YearWindow};

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response: DNS, connection or
    /// timeout failure, or a non-success status from upstream.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),
    /// Upstream answered, but not with the `[metadata, observations]` envelope.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// Raw observation as the World Bank reports it; `value` is null for gaps.
/// Remaining envelope fields (indicator, country, unit, ...) are ignored.
#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    #[serde(default)]
    value: Option<f64>,
}

/// Fetch one indicator over `window` and normalize it into an oldest-first
/// series. No retry here; every failure surfaces to the caller.
pub async fn fetch_series(
    client: &Client,
    config: &AppConfig,
    code: &str,
    window: YearWindow,
) -> Result<Series, FetchError> {
    let url = format!(
        "{base}/{country}/indicator/{code}?format=json&date={start}:{end}&per_page=100",
        base = config.api_base,
        country = config.country,
        code = code,
        start = window.start,
        end = window.end,
    );
    info!("Fetching indicator series from URL: {}", url);

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let series = parse_envelope(&body)?;
    debug!("Indicator {}: {} samples after normalization", code, series.len());
    Ok(series)
}

/// Turn the raw `[metadata, observations]` envelope into a normalized series:
/// metadata dropped, null values zero-filled, newest-first order reversed.
pub fn parse_envelope(body: &str) -> Result<Series, FetchError> {
    let (_metadata, observations): (Value, Value) = serde_json::from_str(body)
        .map_err(|e| {
            FetchError::MalformedResponse(format!("expected [metadata, observations] envelope: {}", e))
        })?;

    let observations: Vec<Observation> = serde_json::from_value(observations).map_err(|e| {
        FetchError::MalformedResponse(format!("observations are not a {{date, value}} sequence: {}", e))
    })?;

    let mut series: Series = observations
        .into_iter()
        .map(|obs| Sample {
            year: obs.date,
            value: obs.value.unwrap_or(0.0),
        })
        .collect();

    // Upstream reports newest-first; charts and CSV want oldest-first.
    series.reverse();
    Ok(series)
}
