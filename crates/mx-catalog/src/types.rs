// Runtime catalog types
//
// These types are embedded in the binary and used for listing lookup at runtime.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct CatalogMetadata {
    pub fetch_timestamp: u64,
    pub source: &'static str,
    pub total_listings: usize,
}

impl CatalogMetadata {
    /// Get snapshot date as DateTime
    pub fn fetch_date(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.fetch_timestamp as i64, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// One listed model offering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Listing {
    pub name: &'static str,
    /// USD per single token of usage
    pub price_per_token: f64,
    /// Detail page URL, passed through to the frontend untouched
    pub link: &'static str,
    /// Benchmark score, higher is better
    pub intelligence: f64,
    /// Typical response latency, lower is better
    pub latency_ms: f64,
}

impl Listing {
    /// Get price per 1K tokens
    pub fn price_per_1k(&self) -> f64 {
        self.price_per_token * 1000.0
    }

    /// Get price per 1M tokens
    pub fn price_per_1m(&self) -> f64 {
        self.price_per_token * 1_000_000.0
    }
}
