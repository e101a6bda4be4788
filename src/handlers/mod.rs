// src/handlers/mod.rs
pub mod dashboard;
pub mod error;
pub mod indicator;

use warp::Reply;

/// Freshness hint toward the frontend and any intermediary caches; the
/// backend itself stores nothing between requests.
pub(crate) fn with_freshness(reply: impl Reply, freshness_secs: u64) -> impl Reply {
    warp::reply::with_header(
        reply,
        "cache-control",
        format!("public, max-age={}", freshness_secs),
    )
}
