// src/handlers/dashboard.rs
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use warp::Rejection;

use super::error::ApiError;
use super::with_freshness;
use crate::models::{IndicatorPanel, YearWindow};
use crate::services::dashboard::compose_dashboard;
use crate::AppState;

pub async fn get_dashboard(state: Arc<AppState>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request for the full dashboard dataset");

    let window = YearWindow::trailing(state.config.window_years);
    let mut dataset =
        compose_dashboard(&state.client, &state.config, &state.catalog, window)
            .await
            .map_err(|e| {
                error!("Dashboard composition failed: {}", e);
                warp::reject::custom(ApiError::upstream(e.to_string()))
            })?;

    let panels: HashMap<String, IndicatorPanel> = state
        .catalog
        .iter()
        .map(|indicator| {
            let series = dataset.remove(&indicator.key).unwrap_or_default();
            (
                indicator.key.clone(),
                IndicatorPanel {
                    code: indicator.code.clone(),
                    name: indicator.name.clone(),
                    description: indicator.description.clone(),
                    color: indicator.color.clone(),
                    series,
                },
            )
        })
        .collect();

    Ok(with_freshness(
        warp::reply::json(&panels),
        state.config.freshness_secs,
    ))
}
