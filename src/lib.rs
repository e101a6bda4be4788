// src/lib.rs

// Re-export or define the top-level modules you need
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared per-process state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: config::AppConfig,
    pub catalog: config::IndicatorCatalog,
}
