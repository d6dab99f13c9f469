//! Litigation Engine - case weighting, argument analysis and strategy selection
//!
//! This crate provides:
//! - Five-factor case weighting and relevance scoring
//! - Case analysis (precedential value, key points, citations, outcome estimate)
//! - Dual-track argument registry with conflict detection
//! - Weakness detection and remediation summaries
//! - Strategy selection from aggregate strength signals
//! - Argument extraction and counter-argument prediction
//!
//! [`LitigationEngine::evaluate`] runs every stage over one case record and
//! returns a serializable [`EvaluationReport`].

pub mod analysis;
pub mod config;
pub mod conflict;
pub mod counter;
pub mod courts;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod patterns;
pub mod scoring;
pub mod similarity;
pub mod source;
pub mod strategy;
pub mod validation;
pub mod weakness;

use std::sync::Arc;

use shared_types::{Argument, CaseRecord, EvaluationReport, TrackSummary};
use tracing::{debug, info, warn};

pub use analysis::CaseAnalyzer;
pub use config::EngineConfig;
pub use conflict::ArgumentTracks;
pub use counter::{CounterArgument, CounterArgumentPredictor};
pub use error::{EngineError, Result};
pub use extract::{classify_argument, ArgumentExtractor, ArgumentFamily};
pub use metrics::StageMetrics;
pub use scoring::{RelevanceScorer, WeightingEngine};
pub use similarity::{LexicalSimilarity, SimilarityProvider};
pub use source::{CaseSource, JsonFileSource};
pub use strategy::StrategyDecisionEngine;
pub use weakness::WeaknessAnalyzer;

/// LitigationEngine entry point
pub struct LitigationEngine {
    config: EngineConfig,
    weighting: WeightingEngine,
    analyzer: CaseAnalyzer,
    weakness: WeaknessAnalyzer,
    strategy: StrategyDecisionEngine,
    similarity: Arc<dyn SimilarityProvider>,
}

impl LitigationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            weighting: WeightingEngine::new(&config),
            analyzer: CaseAnalyzer::new(&config),
            weakness: WeaknessAnalyzer::new(&config),
            strategy: StrategyDecisionEngine::new(&config),
            similarity: Arc::new(LexicalSimilarity::new()),
            config,
        }
    }

    /// Replace the default lexical similarity used for conflict detection
    pub fn with_similarity(mut self, similarity: Arc<dyn SimilarityProvider>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one case.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCase`] when the record has no content,
    /// metadata, citations or arguments. Every other problem degrades the
    /// affected part of the report instead of failing the evaluation.
    pub fn evaluate(&self, case: &CaseRecord) -> Result<EvaluationReport> {
        if case.is_empty() {
            return Err(EngineError::EmptyCase);
        }

        let case_id = case.id.as_deref().unwrap_or("unknown");
        if let Err(err) = validation::validate_case(case) {
            debug!(case_id, "incomplete case, scoring from defaults: {}", err);
        }

        let mut metrics = StageMetrics::new();

        let weights = metrics.time("weighting", true, || self.weighting.weight(case));
        let analysis = metrics.time_with(
            "case_analysis",
            || self.analyzer.analyze(case),
            |analysis| !analysis.outcome_prediction.is_degraded(),
        );
        let weaknesses = metrics.time("weakness_analysis", true, || {
            self.weakness.analyze(&case.arguments)
        });
        let weakness_summary = self.weakness.summary(&weaknesses);
        let tracks = metrics.time("argument_tracks", true, || self.build_tracks(case));
        let strategies = metrics.time("strategy", true, || self.strategy.decide(&case.signals));

        info!(
            case_id,
            relevance = analysis.relevance_score,
            weaknesses = weaknesses.len(),
            primary = strategies.first().map_or("none", |s| s.kind.as_str()),
            "case evaluated"
        );

        Ok(EvaluationReport {
            case_id: case.id.clone(),
            weights,
            relevance_score: analysis.relevance_score,
            analysis,
            weaknesses,
            weakness_summary,
            strategies,
            tracks,
            metrics: metrics.into_vec(),
            evaluated_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Register the case's arguments and facts on fresh tracks
    pub fn build_tracks(&self, case: &CaseRecord) -> TrackSummary {
        let mut tracks = ArgumentTracks::new(&self.config.conflict, Arc::clone(&self.similarity));

        for (index, record) in case.arguments.iter().enumerate() {
            let Some(side) = record.side else {
                warn!(index, "argument has no side, not tracked");
                continue;
            };
            let Some(argument) = Argument::from_record(record) else {
                warn!(index, "argument lacks text or type, not tracked");
                continue;
            };
            tracks.register(argument, side);
        }

        for fact in &case.shared_facts {
            tracks.add_shared_fact(fact.clone());
        }
        for (fact, positions) in &case.disputed_facts {
            tracks.add_disputed_fact(
                fact.clone(),
                positions.prosecution.clone(),
                positions.defense.clone(),
            );
        }

        tracks.summary()
    }
}

impl Default for LitigationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
