//! Configuration for the evaluation pipeline
//!
//! Thresholds and decay constants can be tuned through a TOML file. Every
//! section and key is optional; omitted values keep the defaults below.
//!
//! ```toml
//! reference_year = 2024
//!
//! [weighting]
//! citation_threshold = 50
//! time_decay = 0.98
//!
//! [conflict]
//! similarity_threshold = 0.7
//!
//! [strategy]
//! precedent_floor = 0.7
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Year used as "now" for recency calculations (default: current UTC year)
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub weighting: WeightingConfig,
    #[serde(default)]
    pub conflict: ConflictConfig,
    #[serde(default)]
    pub weakness: WeaknessConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// The configured reference year, or the current UTC year
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Utc::now().year())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingConfig {
    /// Citation count at which citation frequency saturates (default: 50)
    #[serde(default = "default_citation_threshold")]
    pub citation_threshold: u32,
    /// Per-year decay applied to temporal relevance (default: 0.98)
    #[serde(default = "default_time_decay")]
    pub time_decay: f64,
    /// Temporal relevance used when the filing date is missing (default: 0.5)
    #[serde(default = "default_missing_date_weight")]
    pub missing_date_weight: f64,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            citation_threshold: default_citation_threshold(),
            time_decay: default_time_decay(),
            missing_date_weight: default_missing_date_weight(),
        }
    }
}

fn default_citation_threshold() -> u32 {
    50
}

fn default_time_decay() -> f64 {
    0.98
}

fn default_missing_date_weight() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictConfig {
    /// Similarity that must be exceeded before polarity cues are checked
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    0.7
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaknessConfig {
    /// Evidence quality below this value is reported (default: 0.6)
    #[serde(default = "default_evidence_quality_floor")]
    pub evidence_quality_floor: f64,
    /// Severity above this value counts as critical (default: 0.7)
    #[serde(default = "default_critical_severity")]
    pub critical_severity: f64,
}

impl Default for WeaknessConfig {
    fn default() -> Self {
        Self {
            evidence_quality_floor: default_evidence_quality_floor(),
            critical_severity: default_critical_severity(),
        }
    }
}

fn default_evidence_quality_floor() -> f64 {
    0.6
}

fn default_critical_severity() -> f64 {
    0.7
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default = "default_strong")]
    pub aggressive_case_floor: f64,
    #[serde(default = "default_aggressive_opposition_ceiling")]
    pub aggressive_opposition_ceiling: f64,
    #[serde(default = "default_strong")]
    pub defensive_opposition_floor: f64,
    #[serde(default = "default_strong")]
    pub precedent_floor: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            aggressive_case_floor: default_strong(),
            aggressive_opposition_ceiling: default_aggressive_opposition_ceiling(),
            defensive_opposition_floor: default_strong(),
            precedent_floor: default_strong(),
        }
    }
}

fn default_strong() -> f64 {
    0.7
}

fn default_aggressive_opposition_ceiling() -> f64 {
    0.5
}
