// src/handlers/indicator.rs
use log::{error, info};
use std::sync::Arc;
use warp::Rejection;

use super::error::ApiError;
use super::with_freshness;
use crate::config::Indicator;
use crate::models::{IndicatorPanel, Series, YearWindow};
use crate::services::export::series_to_csv;
use crate::services::worldbank::fetch_series;
use crate::AppState;

pub async fn get_indicator(key: String, state: Arc<AppState>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request for indicator '{}'", key);

    let (indicator, series) = fetch_for_key(&key, &state).await?;
    let panel = IndicatorPanel {
        code: indicator.code,
        name: indicator.name,
        description: indicator.description,
        color: indicator.color,
        series,
    };

    Ok(with_freshness(
        warp::reply::json(&panel),
        state.config.freshness_secs,
    ))
}

pub async fn get_indicator_csv(
    key: String,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, Rejection> {
    info!("Handling CSV export for indicator '{}'", key);

    let (indicator, series) = fetch_for_key(&key, &state).await?;
    let csv_text = series_to_csv(&series).map_err(|e| {
        error!("CSV export failed for '{}': {}", key, e);
        warp::reject::custom(ApiError::internal(e.to_string()))
    })?;

    let reply = warp::reply::with_header(csv_text, "content-type", "text/csv; charset=utf-8");
    let reply = warp::reply::with_header(
        reply,
        "content-disposition",
        format!("attachment; filename=\"{}.csv\"", indicator.name),
    );
    Ok(with_freshness(reply, state.config.freshness_secs))
}

/// Shared lookup + fetch for the single-indicator endpoints. Unknown keys
/// become a 404; fetch failures become upstream rejections.
async fn fetch_for_key(key: &str, state: &AppState) -> Result<(Indicator, Series), Rejection> {
    let indicator = state
        .catalog
        .get(key)
        .cloned()
        .ok_or_else(warp::reject::not_found)?;

    let window = YearWindow::trailing(state.config.window_years);
    let series = fetch_series(&state.client, &state.config, &indicator.code, window)
        .await
        .map_err(|e| {
            error!("Failed to fetch indicator '{}': {}", key, e);
            warp::reject::custom(ApiError::upstream(e.to_string()))
        })?;

    Ok((indicator, series))
}
