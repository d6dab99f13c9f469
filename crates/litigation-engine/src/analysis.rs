//! Case-level analysis built on the relevance score
//!
//! Produces precedential value, key points (holdings and reasoning spans),
//! citation analysis, and an outcome estimate. The outcome estimate never
//! fails outright: problems degrade it to a neutral default carrying the error.

use shared_types::{
    CaseAnalysis, CaseRecord, CitationAnalysis, CitationCount, OutcomeFactors,
    OutcomePrediction, PrecedentialValue, ReporterCount, SubsequentHistory,
};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::courts;
use crate::error::{EngineError, Result};
use crate::patterns::{find_patterns, reporter_of, HOLDING_PATTERNS, REASONING_PATTERNS};
use crate::scoring::RelevanceScorer;

/// Citation count at which the precedent factor of an outcome estimate reaches 1.0
const PRECEDENT_CITATION_SCALE: f64 = 100.0;
const CONFIDENCE_FACTOR: f64 = 1.2;

#[derive(Debug, Clone)]
pub struct CaseAnalyzer {
    scorer: RelevanceScorer,
}

impl CaseAnalyzer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            scorer: RelevanceScorer::new(config),
        }
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    pub fn analyze(&self, case: &CaseRecord) -> CaseAnalysis {
        let analysis = CaseAnalysis {
            relevance_score: self.scorer.score(case),
            precedential_value: precedential_value(case),
            key_points: key_points(&case.content),
            citation_analysis: citation_analysis(&case.citations),
            outcome_prediction: self.predict_outcome(case),
        };
        debug!(
            case_id = case.id.as_deref().unwrap_or("unknown"),
            relevance = analysis.relevance_score,
            key_points = analysis.key_points.len(),
            "case analysis complete"
        );
        analysis
    }

    /// Outcome estimate; degrades to `{probability: 0.5, confidence: 0.0}` on error
    pub fn predict_outcome(&self, case: &CaseRecord) -> OutcomePrediction {
        match self.try_predict_outcome(case) {
            Ok(prediction) => prediction,
            Err(err) => {
                warn!("outcome prediction degraded: {}", err);
                OutcomePrediction::degraded(err.to_string())
            }
        }
    }

    fn try_predict_outcome(&self, case: &CaseRecord) -> Result<OutcomePrediction> {
        if case.metadata.is_none() {
            return Err(EngineError::MissingField("metadata"));
        }

        let strength = self.scorer.score(case);
        let precedent = precedential_value(case).citation_count as f64 / PRECEDENT_CITATION_SCALE;
        let probability = (strength + precedent) / 2.0;

        Ok(OutcomePrediction {
            probability,
            confidence: (probability * CONFIDENCE_FACTOR).min(1.0),
            factors: Some(OutcomeFactors {
                strength,
                precedent,
            }),
            error: None,
        })
    }
}

pub fn precedential_value(case: &CaseRecord) -> PrecedentialValue {
    PrecedentialValue {
        court_level: courts::court_level(case.court()).to_string(),
        citation_count: case.citations.len(),
        subsequent_history: SubsequentHistory::default(),
    }
}

/// Holding statements followed by reasoning spans
pub fn key_points(content: &str) -> Vec<String> {
    find_patterns(content, &HOLDING_PATTERNS)
        .into_iter()
        .chain(find_patterns(content, &REASONING_PATTERNS))
        .map(|m| m.text.trim().to_string())
        .collect()
}

pub fn citation_analysis(citations: &[String]) -> CitationAnalysis {
    let mut frequency: Vec<CitationCount> = Vec::new();
    let mut reporters: Vec<ReporterCount> = Vec::new();

    for citation in citations {
        match frequency.iter_mut().find(|c| &c.citation == citation) {
            Some(entry) => entry.count += 1,
            None => frequency.push(CitationCount {
                citation: citation.clone(),
                count: 1,
            }),
        }

        if let Some(reporter) = reporter_of(citation) {
            match reporters.iter_mut().find(|r| r.reporter == reporter) {
                Some(entry) => entry.count += 1,
                None => reporters.push(ReporterCount { reporter, count: 1 }),
            }
        }
    }

    CitationAnalysis {
        total_citations: citations.len(),
        citation_frequency: frequency,
        citation_patterns: reporters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::CaseMetadata;

    fn analyzer() -> CaseAnalyzer {
        CaseAnalyzer::new(&EngineConfig::default().with_reference_year(2025))
    }

    fn sample_case() -> CaseRecord {
        CaseRecord {
            id: Some("case123".into()),
            metadata: Some(CaseMetadata {
                date: Some("2023-01-01".into()),
                court: Some("Supreme Court".into()),
                case_number: Some("123-456".into()),
            }),
            content: "The Court holds that the statute applies. This follows because the \
                      text is plain. Consequently, the judgment stands."
                .into(),
            citations: vec!["410 U.S. 113".into(), "347 U.S. 483".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_precedential_value() {
        let value = precedential_value(&sample_case());
        assert_eq!(value.court_level, "Supreme Court");
        assert_eq!(value.citation_count, 2);
        assert_eq!(value.subsequent_history, SubsequentHistory::default());
    }

    #[test]
    fn test_key_points_list_holdings_before_reasoning() {
        let points = key_points(&sample_case().content);
        assert_eq!(
            points,
            vec![
                "The Court holds that the statute applies".to_string(),
                "because the text is plain".to_string(),
                "Consequently, the judgment stands".to_string(),
            ]
        );
    }

    #[test]
    fn test_citation_analysis_counts_repeats_and_reporters() {
        let citations: Vec<String> = vec![
            "410 U.S. 113".into(),
            "123 F.3d 456".into(),
            "410 U.S. 113".into(),
            "Brown v. Board".into(),
        ];
        let analysis = citation_analysis(&citations);

        assert_eq!(analysis.total_citations, 4);
        assert_eq!(
            analysis.citation_frequency[0],
            CitationCount {
                citation: "410 U.S. 113".into(),
                count: 2
            }
        );
        assert_eq!(analysis.citation_frequency.len(), 3);
        assert_eq!(
            analysis.citation_patterns,
            vec![
                ReporterCount {
                    reporter: "U.S.".into(),
                    count: 2
                },
                ReporterCount {
                    reporter: "F.3d".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_outcome_prediction() {
        let prediction = analyzer().predict_outcome(&sample_case());
        let factors = prediction.factors.unwrap();

        assert!((factors.strength - 0.7).abs() < 1e-12);
        assert!((factors.precedent - 0.02).abs() < 1e-12);
        assert!((prediction.probability - 0.36).abs() < 1e-12);
        assert!((prediction.confidence - 0.432).abs() < 1e-12);
        assert!(prediction.error.is_none());
    }

    #[test]
    fn test_outcome_prediction_degrades_without_metadata() {
        let case = CaseRecord {
            content: "We hold that the stop was lawful.".into(),
            ..Default::default()
        };
        let prediction = analyzer().predict_outcome(&case);

        assert!(prediction.is_degraded());
        assert_eq!(prediction.probability, 0.5);
        assert_eq!(prediction.confidence, 0.0);
        assert!(prediction.error.unwrap().contains("metadata"));
    }

    #[test]
    fn test_analyze_bundles_every_section() {
        let analysis = analyzer().analyze(&sample_case());
        assert!((0.0..=1.0).contains(&analysis.relevance_score));
        assert_eq!(analysis.precedential_value.citation_count, 2);
        assert_eq!(analysis.key_points.len(), 3);
        assert_eq!(analysis.citation_analysis.total_citations, 2);
    }
}
