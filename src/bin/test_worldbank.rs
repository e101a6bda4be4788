// src/bin/test_worldbank.rs
//
// Manual check against the live World Bank API: fetches the full catalog
// and prints the shape of every series. Run with `cargo run --bin test_worldbank`.
use tunisia_macro_dashboard::config::{AppConfig, IndicatorCatalog};
use tunisia_macro_dashboard::models::YearWindow;
use tunisia_macro_dashboard::services::dashboard::compose_dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let catalog = IndicatorCatalog::standard();
    let window = YearWindow::trailing(config.window_years);
    let client = reqwest::Client::new();

    let dataset = compose_dashboard(&client, &config, &catalog, window).await?;
    for indicator in catalog.iter() {
        if let Some(series) = dataset.get(&indicator.key) {
            let first = series.first().map(|s| s.year.as_str()).unwrap_or("-");
            let last = series.last().map(|s| s.year.as_str()).unwrap_or("-");
            println!(
                "{:<14} {:>3} samples  {}..{}",
                indicator.key,
                series.len(),
                first,
                last
            );
        }
    }
    Ok(())
}
