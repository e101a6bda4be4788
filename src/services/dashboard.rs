// src/services/dashboard.rs
use log::{error, info};
use reqwest::Client;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::config::{AppConfig, IndicatorCatalog};
use crate::models::{DashboardDataset, YearWindow};
use crate::services::worldbank::fetch_series;

/// One or more per-indicator fetches failed during fan-out. The dataset is
/// all-or-nothing, so nothing fetched so far is kept.
#[derive(Debug, Error)]
#[error("indicator fetch failed for [{}]", .failed_keys.join(", "))]
pub struct PartialDatasetFailure {
    pub failed_keys: Vec<String>,
}

/// Fetch every catalog entry concurrently and join the results into a
/// dataset keyed by the catalog's logical keys. On the first failure the
/// remaining in-flight fetches are aborted rather than left to finish.
pub async fn compose_dashboard(
    client: &Client,
    config: &AppConfig,
    catalog: &IndicatorCatalog,
    window: YearWindow,
) -> Result<DashboardDataset, PartialDatasetFailure> {
    info!(
        "Composing dashboard dataset: {} indicators over {}:{}",
        catalog.len(),
        window.start,
        window.end
    );

    let mut fetches = JoinSet::new();
    for indicator in catalog.iter() {
        let client = client.clone();
        let config = config.clone();
        let key = indicator.key.clone();
        let code = indicator.code.clone();
        fetches.spawn(async move {
            let result = fetch_series(&client, &config, &code, window).await;
            (key, result)
        });
    }

    let mut dataset = DashboardDataset::new();
    let mut failed_keys = Vec::new();
    while let Some(joined) = fetches.join_next().await {
        let (key, result) = match joined {
            Ok(pair) => pair,
            // Tasks cancelled by abort_all (or killed by a panic) land here;
            // the completeness check below accounts for them.
            Err(_) => continue,
        };
        match result {
            Ok(series) => {
                dataset.insert(key, series);
            }
            Err(fetch_error) => {
                error!("Failed to fetch indicator '{}': {}", key, fetch_error);
                failed_keys.push(key);
                fetches.abort_all();
            }
        }
    }

    // A worker that died without reporting leaves no failed key behind;
    // recover the missing ones from the catalog so the dataset is never
    // returned with holes.
    if failed_keys.is_empty() && dataset.len() != catalog.len() {
        failed_keys = catalog
            .iter()
            .map(|indicator| indicator.key.clone())
            .filter(|key| !dataset.contains_key(key))
            .collect();
    }

    if !failed_keys.is_empty() {
        failed_keys.sort();
        return Err(PartialDatasetFailure { failed_keys });
    }

    Ok(dataset)
}
