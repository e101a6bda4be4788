// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use crate::handlers::{dashboard::get_dashboard, indicator::get_indicator,
                     indicator::get_indicator_csv};
use crate::AppState;
use log::info;

use std::convert::Infallible;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

// Add recovery handling for our custom errors
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = warp::http::StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else {
        code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let state_filter = warp::any().map(move || state.clone());

    let dashboard_route = warp::path!("api" / "v1" / "dashboard")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_dashboard);

    let indicator_csv_route = warp::path!("api" / "v1" / "indicator" / String / "csv")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_indicator_csv);

    let indicator_route = warp::path!("api" / "v1" / "indicator" / String)
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_indicator);

    info!("All routes configured successfully.");

    dashboard_route
        .or(indicator_csv_route)
        .or(indicator_route)
        .recover(handle_rejection)
}
