use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use tunisia_macro_dashboard::config::{AppConfig, IndicatorCatalog};
use tunisia_macro_dashboard::{routes, AppState};

#[tokio::main]
async fn main() {
    // Initialize the logger
    dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    // Get port from the environment, default to 3030
    let port_str = env::var("PORT").unwrap_or_else(|_| {
        warn!("$PORT not set, defaulting to 3030");
        "3030".to_string()
    });

    let port: u16 = port_str.parse().expect("PORT must be a number");
    info!("Using PORT: {}", port);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("Will bind to: {}", addr);

    let config = AppConfig::from_env();
    let catalog = IndicatorCatalog::standard();
    info!(
        "Serving {} indicators for country {} ({} year window)",
        catalog.len(),
        config.country,
        config.window_years
    );

    let state = Arc::new(AppState {
        client: reqwest::Client::new(),
        config,
        catalog,
    });

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    // Set up routes
    let api = routes::routes(state).with(cors);
    info!("Routes configured successfully with CORS.");

    // Start the server
    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
}
