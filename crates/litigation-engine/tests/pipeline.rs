//! End-to-end evaluation tests
//!
//! Run with: cargo test -p litigation-engine --test pipeline

use std::sync::Arc;

use litigation_engine::{
    EngineConfig, EngineError, LitigationEngine, Result, SimilarityProvider,
};
use pretty_assertions::assert_eq;
use shared_types::{
    CaseRecord, EvaluationReport, Side, StrategyType, WeaknessKind,
};

fn engine() -> LitigationEngine {
    LitigationEngine::new(EngineConfig::default().with_reference_year(2025))
}

fn sample_case() -> CaseRecord {
    serde_json::from_str(
        r#"{
            "id": "case123",
            "metadata": {
                "date": "2023-01-01",
                "court": "Supreme Court",
                "case_number": "123-456"
            },
            "content": "The Court holds that the statute applies. This follows because the text is plain.",
            "citations": ["410 U.S. 113", "347 U.S. 483"]
        }"#,
    )
    .expect("sample case should parse")
}

fn contested_case() -> CaseRecord {
    serde_json::from_str(
        r#"{
            "id": "contested",
            "metadata": {"date": "2020-05-01", "court": "Circuit Court"},
            "content": "Defendant argues that the search was unlawful.",
            "citations": ["123 F.3d 456"],
            "keywords": ["search", "warrant"],
            "citation_count": 30,
            "precedent_setting": true,
            "arguments": [
                {
                    "text": "The phone record confirms the defendant was at the scene",
                    "type": "factual",
                    "side": "prosecution",
                    "evidence": ["Exhibit 4"],
                    "strength": 0.8
                },
                {
                    "text": "The phone record contradicts the defendant was at the scene",
                    "type": "factual",
                    "side": "defense",
                    "evidence_quality": 0.3,
                    "strength": 0.6,
                    "precedents": [{"citation": "347 U.S. 483", "distinguishable": true}]
                },
                {"text": "An argument without a type"}
            ],
            "shared_facts": ["The arrest occurred on May 1"],
            "disputed_facts": {
                "Consent": {"prosecution": "Given verbally", "defense": "Never given"}
            },
            "signals": {
                "evidence_score": 0.9,
                "precedent_score": 0.8,
                "coherence_score": 0.9,
                "counter_argument_strength": 0.3,
                "opposing_evidence_strength": 0.3
            }
        }"#,
    )
    .expect("contested case should parse")
}

#[test]
fn test_sample_case_end_to_end() {
    let report = engine().evaluate(&sample_case()).unwrap();

    assert!((0.0..=1.0).contains(&report.relevance_score));
    assert!((report.relevance_score - 0.7).abs() < 1e-12);
    assert_eq!(report.analysis.precedential_value.citation_count, 2);
    assert_eq!(report.analysis.precedential_value.court_level, "Supreme Court");
    assert!(!report.analysis.outcome_prediction.is_degraded());
    assert!((report.weights.sum() - 1.0).abs() < 1e-9);

    let primary = report.primary_strategy().unwrap();
    assert_eq!(primary.kind, StrategyType::Balanced);
}

#[test]
fn test_contested_case_end_to_end() {
    let report = engine().evaluate(&contested_case()).unwrap();

    // Conflict is recorded on the later defense argument only
    assert_eq!(report.tracks.prosecution_arguments, 1);
    assert_eq!(report.tracks.defense_arguments, 1);
    assert_eq!(report.tracks.conflicts.len(), 1);
    assert_eq!(report.tracks.conflicts[0].side, Side::Defense);
    assert_eq!(report.tracks.shared_facts, 1);
    assert_eq!(report.tracks.disputed_facts, 1);

    let kinds: Vec<WeaknessKind> = report.weaknesses.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WeaknessKind::EvidenceGap,
            WeaknessKind::EvidenceQuality,
            WeaknessKind::PrecedentWeakness,
        ]
    );
    assert_eq!(report.weakness_summary.critical_weaknesses, 1);

    let strategies: Vec<StrategyType> = report.strategies.iter().map(|s| s.kind).collect();
    assert_eq!(
        strategies,
        vec![StrategyType::Aggressive, StrategyType::PrecedentFocused]
    );
}

#[test]
fn test_report_round_trips_through_json() {
    let report = engine().evaluate(&contested_case()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let decoded: EvaluationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
    assert!(json.contains("\"type\":\"aggressive\""));
}

#[test]
fn test_text_report_lists_primary_strategy() {
    let text = engine().evaluate(&contested_case()).unwrap().to_text();
    assert!(text.starts_with("Case Evaluation Report: contested"));
    assert!(text.contains("* [1] aggressive"));
    assert!(text.contains("Weaknesses: 3 total, 1 critical"));
}

#[test]
fn test_empty_record_is_the_only_hard_error() {
    let empty: CaseRecord = serde_json::from_str("{}").unwrap();
    assert!(matches!(engine().evaluate(&empty), Err(EngineError::EmptyCase)));
}

struct Unavailable;

impl SimilarityProvider for Unavailable {
    fn similarity(&self, _a: &str, _b: &str) -> Result<f64> {
        Err(EngineError::Capability("embedding service unavailable".into()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[test]
fn test_similarity_outage_only_drops_conflicts() {
    let report = engine()
        .with_similarity(Arc::new(Unavailable))
        .evaluate(&contested_case())
        .unwrap();

    assert!(report.tracks.conflicts.is_empty());
    assert_eq!(report.tracks.defense_arguments, 1);
    assert_eq!(report.weaknesses.len(), 3);
}

#[test]
fn test_evaluations_run_on_separate_threads() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.evaluate(&sample_case()).map(|r| r.relevance_score))
        })
        .collect();

    for handle in handles {
        let score = handle.join().unwrap().unwrap();
        assert!((score - 0.7).abs() < 1e-12);
    }
}
