// Five-factor case weighting
use shared_types::{CaseRecord, ImpactFlags, WeightVector};
use tracing::debug;

use crate::config::{EngineConfig, WeightingConfig};
use crate::courts;
use crate::scoring::{parse_filing_year, unit};

const KEYWORD_WEIGHT: f64 = 0.1;
const CONTEXT_SIMILARITY_WEIGHT: f64 = 0.5;

/// Outcome-impact increments per flag
const PRECEDENT_SETTING: f64 = 0.3;
const OVERTURNED_PREVIOUS: f64 = 0.2;
const WIDELY_CITED: f64 = 0.2;
const CURRENT_RELEVANCE: f64 = 0.3;

/// Computes normalized factor weights for a single case
#[derive(Debug, Clone)]
pub struct WeightingEngine {
    config: WeightingConfig,
    current_year: i32,
}

impl WeightingEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.weighting.clone(),
            current_year: config.current_year(),
        }
    }

    /// Normalized weight vector. Falls back to equal weights when every raw score is zero.
    pub fn weight(&self, case: &CaseRecord) -> WeightVector {
        normalize(self.raw_scores(case))
    }

    /// Unnormalized factor scores, each in `[0, 1]`
    pub fn raw_scores(&self, case: &CaseRecord) -> WeightVector {
        WeightVector {
            relevance: self.relevance_score(case),
            citation_frequency: self.citation_score(case),
            court_hierarchy: courts::hierarchy_weight(case.court()),
            outcome_impact: outcome_impact(&case.impact),
            temporal_relevance: self.temporal_score(case),
        }
    }

    fn relevance_score(&self, case: &CaseRecord) -> f64 {
        let keywords = case.keywords.len() as f64 * KEYWORD_WEIGHT;
        let context = unit(case.context_similarity) * CONTEXT_SIMILARITY_WEIGHT;
        (keywords + context).min(1.0)
    }

    fn citation_score(&self, case: &CaseRecord) -> f64 {
        let citations = case.citation_count.unwrap_or(0) as f64;
        let threshold = self.config.citation_threshold.max(1) as f64;
        (citations / threshold).min(1.0)
    }

    fn temporal_score(&self, case: &CaseRecord) -> f64 {
        let Some(date) = case.date() else {
            return self.config.missing_date_weight;
        };

        match parse_filing_year(date) {
            Ok(year) => {
                let years = self.current_year.saturating_sub(year);
                // Future filing dates saturate instead of exceeding 1.0
                self.config.time_decay.powi(years).clamp(0.0, 1.0)
            }
            Err(err) => {
                debug!("{}, using missing-date weight", err);
                self.config.missing_date_weight
            }
        }
    }
}

fn normalize(raw: WeightVector) -> WeightVector {
    let total = raw.sum();

    if !(total.is_finite() && total > 0.0) {
        debug!("all factor scores are zero, using uniform weights");
        return WeightVector::uniform();
    }

    WeightVector {
        relevance: raw.relevance / total,
        citation_frequency: raw.citation_frequency / total,
        court_hierarchy: raw.court_hierarchy / total,
        outcome_impact: raw.outcome_impact / total,
        temporal_relevance: raw.temporal_relevance / total,
    }
}

fn outcome_impact(flags: &ImpactFlags) -> f64 {
    [
        (flags.precedent_setting, PRECEDENT_SETTING),
        (flags.overturned_previous, OVERTURNED_PREVIOUS),
        (flags.widely_cited, WIDELY_CITED),
        (flags.current_relevance, CURRENT_RELEVANCE),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, increment)| increment)
    .sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::CaseMetadata;

    fn court_name() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None::<String>),
            Just(Some("Supreme Court".to_string())),
            Just(Some("State Trial Court".to_string())),
            "[A-Za-z ]{0,20}".prop_map(Some),
        ]
    }

    proptest! {
        /// Property: weights are non-negative and sum to 1.0 for any record
        #[test]
        fn weights_always_normalized(
            keywords in 0usize..20,
            context in proptest::option::of(-2.0f64..2.0),
            citations in proptest::option::of(0u32..500),
            court in court_name(),
            year in proptest::option::of(1800i32..2100),
            flags in proptest::array::uniform4(any::<bool>()),
        ) {
            let case = CaseRecord {
                metadata: Some(CaseMetadata {
                    date: year.map(|y| format!("{:04}-06-15", y)),
                    court,
                    case_number: None,
                }),
                keywords: vec!["kw".to_string(); keywords],
                context_similarity: context,
                citation_count: citations,
                impact: ImpactFlags {
                    precedent_setting: flags[0],
                    overturned_previous: flags[1],
                    widely_cited: flags[2],
                    current_relevance: flags[3],
                },
                ..Default::default()
            };

            let weights = WeightingEngine::new(&EngineConfig::default().with_reference_year(2024))
                .weight(&case);
            prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
            prop_assert!(weights.values().iter().all(|w| *w >= 0.0));
        }
    }
}
