// Relevance scoring from recency, court tier and citation volume
use serde::{Deserialize, Serialize};
use shared_types::CaseRecord;
use tracing::debug;

use crate::config::EngineConfig;
use crate::courts;
use crate::scoring::parse_filing_year;

const YEARLY_DECAY: f64 = 0.05;
const MIN_TIME_WEIGHT: f64 = 0.1;
const PER_CITATION: f64 = 0.1;

/// The three sub-scores behind a relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelevanceComponents {
    pub time: f64,
    pub court: f64,
    pub citation: f64,
}

impl RelevanceComponents {
    /// Averaged by three and capped at 1.0
    pub fn combined(&self) -> f64 {
        ((self.time + self.court + self.citation) / 3.0).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    current_year: i32,
}

impl RelevanceScorer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            current_year: config.current_year(),
        }
    }

    /// Relevance of a case in `[0, 1]`
    pub fn score(&self, case: &CaseRecord) -> f64 {
        self.components(case).combined()
    }

    pub fn components(&self, case: &CaseRecord) -> RelevanceComponents {
        // Absent date or court contributes nothing
        let time = case
            .date()
            .map(|date| self.time_weight(self.filing_year(date)))
            .unwrap_or(0.0);
        let court = case.court().map(courts::precedent_weight).unwrap_or(0.0);

        RelevanceComponents {
            time,
            court,
            citation: citation_weight(case.citations.len()),
        }
    }

    /// Recency weight, never below 0.1
    pub fn time_weight(&self, year: i32) -> f64 {
        let years = f64::from(self.current_year.saturating_sub(year));
        (1.0 - years * YEARLY_DECAY).max(MIN_TIME_WEIGHT)
    }

    fn filing_year(&self, date: &str) -> i32 {
        parse_filing_year(date).unwrap_or_else(|err| {
            debug!("{}, assuming current year", err);
            self.current_year
        })
    }
}

/// Citation sub-score, saturating at ten citations
pub fn citation_weight(count: usize) -> f64 {
    (count as f64 * PER_CITATION).min(1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::CaseMetadata;

    proptest! {
        /// Property: relevance always lands in [0, 1]
        #[test]
        fn score_is_bounded(
            date in proptest::option::of("\\PC{0,12}"),
            court in proptest::option::of("\\PC{0,24}"),
            citations in 0usize..40,
        ) {
            let case = CaseRecord {
                metadata: Some(CaseMetadata { date, court, case_number: None }),
                citations: vec!["347 U.S. 483".to_string(); citations],
                ..Default::default()
            };
            let score = RelevanceScorer::new(&EngineConfig::default().with_reference_year(2024))
                .score(&case);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Property: adding a citation never lowers the citation sub-score
        #[test]
        fn citation_weight_is_monotone(count in 0usize..100) {
            prop_assert!(citation_weight(count + 1) >= citation_weight(count));
        }
    }
}
