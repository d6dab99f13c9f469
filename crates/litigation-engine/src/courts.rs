//! Court tiers and their fixed weight tables
//!
//! There are two tables. The hierarchy table covers state courts and feeds
//! factor weighting; relevance scoring recognizes only the three federal
//! tiers and gives every other court the default weight.

use serde::{Deserialize, Serialize};

/// Weight for a court that is present but not in the table
pub const UNKNOWN_COURT_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtTier {
    SupremeCourt,
    CircuitCourt,
    DistrictCourt,
    StateSupremeCourt,
    StateAppellateCourt,
    StateTrialCourt,
}

impl CourtTier {
    pub const ALL: [CourtTier; 6] = [
        CourtTier::SupremeCourt,
        CourtTier::CircuitCourt,
        CourtTier::DistrictCourt,
        CourtTier::StateSupremeCourt,
        CourtTier::StateAppellateCourt,
        CourtTier::StateTrialCourt,
    ];

    /// Court name as it appears in case metadata
    pub fn name(&self) -> &'static str {
        match self {
            CourtTier::SupremeCourt => "Supreme Court",
            CourtTier::CircuitCourt => "Circuit Court",
            CourtTier::DistrictCourt => "District Court",
            CourtTier::StateSupremeCourt => "State Supreme Court",
            CourtTier::StateAppellateCourt => "State Appellate Court",
            CourtTier::StateTrialCourt => "State Trial Court",
        }
    }

    /// Exact (case-insensitive) lookup by name; `None` for unlisted courts
    pub fn parse(court: &str) -> Option<CourtTier> {
        let court = court.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(court))
    }

    /// Weight in the court-hierarchy factor
    pub fn hierarchy_weight(&self) -> f64 {
        match self {
            CourtTier::SupremeCourt => 1.0,
            CourtTier::CircuitCourt => 0.8,
            CourtTier::DistrictCourt => 0.6,
            CourtTier::StateSupremeCourt => 0.7,
            CourtTier::StateAppellateCourt => 0.5,
            CourtTier::StateTrialCourt => 0.4,
        }
    }

    /// Precedent weight used by relevance scoring (federal tiers only)
    pub fn precedent_weight(&self) -> Option<f64> {
        match self {
            CourtTier::SupremeCourt => Some(1.0),
            CourtTier::CircuitCourt => Some(0.8),
            CourtTier::DistrictCourt => Some(0.6),
            _ => None,
        }
    }
}

/// Hierarchy weight for a court name. A missing court is read as a district court.
pub fn hierarchy_weight(court: Option<&str>) -> f64 {
    match court {
        None => CourtTier::DistrictCourt.hierarchy_weight(),
        Some(name) => CourtTier::parse(name)
            .map(|tier| tier.hierarchy_weight())
            .unwrap_or(UNKNOWN_COURT_WEIGHT),
    }
}

/// Precedent weight for a court name that is present in the metadata
pub fn precedent_weight(court: &str) -> f64 {
    CourtTier::parse(court)
        .and_then(|tier| tier.precedent_weight())
        .unwrap_or(UNKNOWN_COURT_WEIGHT)
}

/// Court level label for precedential value: a recognized federal tier or "Other"
pub fn court_level(court: Option<&str>) -> &'static str {
    court
        .and_then(CourtTier::parse)
        .filter(|tier| tier.precedent_weight().is_some())
        .map(|tier| tier.name())
        .unwrap_or("Other")
}
