// src/config.rs
use log::warn;
use serde::Serialize;
use std::env;

/// Upstream and windowing settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// World Bank country API root, without a trailing slash.
    pub api_base: String,
    /// ISO country code the whole dashboard is scoped to.
    pub country: String,
    /// Length of the trailing year window shown on every chart.
    pub window_years: i32,
    /// max-age hint attached to data responses; nothing is cached server-side.
    pub freshness_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            api_base: env::var("WORLDBANK_API_BASE")
                .unwrap_or_else(|_| "https://api.worldbank.org/v2/country".to_string()),
            country: env::var("DASHBOARD_COUNTRY").unwrap_or_else(|_| "TUN".to_string()),
            window_years: parse_env_or("DASHBOARD_WINDOW_YEARS", 10),
            freshness_secs: parse_env_or("DASHBOARD_FRESHNESS_SECS", 86_400),
        }
    }
}

fn parse_env_or<T: std::str::FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("${} is not a number, defaulting to {}", name, default);
            default
        }),
        Err(_) => default,
    }
}

/// One dashboard card: the upstream series code plus what the frontend
/// needs to label and color it.
#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub key: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

impl Indicator {
    fn new(key: &str, code: &str, name: &str, description: &str) -> Self {
        Indicator {
            key: key.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            color: CHART_COLOR.to_string(),
        }
    }
}

const CHART_COLOR: &str = "#8884d8";

/// The fixed set of series the dashboard shows, in display order.
/// Passed into the composer explicitly so tests can swap in their own.
#[derive(Debug, Clone)]
pub struct IndicatorCatalog {
    indicators: Vec<Indicator>,
}

impl IndicatorCatalog {
    pub fn new(indicators: Vec<Indicator>) -> Self {
        IndicatorCatalog { indicators }
    }

    /// The six indicators the Tunisia dashboard has always shown.
    pub fn standard() -> Self {
        IndicatorCatalog::new(vec![
            Indicator::new(
                "gdp",
                "NY.GDP.MKTP.CD",
                "GDP (Current US$)",
                "Gross Domestic Product (GDP) is the total monetary value of all goods and \
                 services produced within a country's borders in a specific time period. It \
                 serves as a comprehensive scorecard of a country's economic health.",
            ),
            Indicator::new(
                "gdpGrowth",
                "NY.GDP.MKTP.KD.ZG",
                "GDP Growth (annual %)",
                "GDP Growth rate represents the percentage change in a country's GDP from one \
                 year to the next. It's a key indicator of economic expansion or contraction.",
            ),
            Indicator::new(
                "inflation",
                "FP.CPI.TOTL.ZG",
                "Inflation (annual %)",
                "Inflation measures the rate at which the general level of prices for goods \
                 and services is rising, consequently eroding purchasing power. It's typically \
                 expressed as an annual percentage change.",
            ),
            Indicator::new(
                "unemployment",
                "SL.UEM.TOTL.ZS",
                "Unemployment (% of total labor force)",
                "The unemployment rate represents the percentage of the labor force that is \
                 without work but available for and seeking employment. It's a crucial \
                 indicator of the economy's performance.",
            ),
            Indicator::new(
                "fdi",
                "BX.KLT.DINV.WD.GD.ZS",
                "Foreign Direct Investment (% of GDP)",
                "Foreign Direct Investment (FDI) represents the net inflows of investment to \
                 acquire a lasting management interest in an enterprise operating in an economy \
                 other than that of the investor. It's expressed as a percentage of GDP.",
            ),
            Indicator::new(
                "population",
                "SP.POP.TOTL",
                "Population",
                "Total population counts all residents regardless of legal status or \
                 citizenship. The values shown are midyear estimates. Population growth can \
                 impact various economic factors.",
            ),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.key == key)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
