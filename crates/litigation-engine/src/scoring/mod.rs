//! Case scoring
//!
//! - [`weighting`]: normalized five-factor weight vector
//! - [`relevance`]: bounded relevance score from recency, court and citations

pub mod relevance;
pub mod weighting;

pub use relevance::{RelevanceComponents, RelevanceScorer};
pub use weighting::WeightingEngine;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, Result};

/// Year of a `YYYY-MM-DD` filing date
pub fn parse_filing_year(date: &str) -> Result<i32> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.year())
        .map_err(|_| EngineError::MalformedValue {
            field: "date",
            value: date.to_string(),
        })
}

/// Clamp an optional input into `[0, 1]`, treating absent or non-finite values as 0
pub(crate) fn unit(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => 0.0,
    }
}
