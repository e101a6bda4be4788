// src/models.rs
use chrono::{Datelike, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// One normalized observation: a four-digit calendar year (kept as the
/// upstream string) and its value. Upstream nulls are flattened to 0.0,
/// which is indistinguishable from a genuinely reported zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub year: String,
    pub value: f64,
}

/// Oldest-first history for one indicator; years are unique within a series.
pub type Series = Vec<Sample>;

/// One fetched series per catalog key. Built once per request and never
/// mutated afterwards; either complete or not produced at all.
pub type DashboardDataset = HashMap<String, Series>;

/// Inclusive calendar-year range requested from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    /// Trailing window ending at the current calendar year.
    pub fn trailing(window_years: i32) -> Self {
        let end = Utc::now().year();
        YearWindow { start: end - window_years, end }
    }
}

/// Everything the frontend renders for one dashboard card.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorPanel {
    pub code: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub series: Series,
}
