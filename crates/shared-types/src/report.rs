//! Result types produced by case evaluation

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Side, WeightVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessKind {
    EvidenceGap,
    EvidenceQuality,
    LogicalFlaw,
    PrecedentWeakness,
}

impl WeaknessKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaknessKind::EvidenceGap => "evidence_gap",
            WeaknessKind::EvidenceQuality => "evidence_quality",
            WeaknessKind::LogicalFlaw => "logical_flaw",
            WeaknessKind::PrecedentWeakness => "precedent_weakness",
        }
    }
}

impl fmt::Display for WeaknessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub description: String,
    pub severity: f64, // 0.0 - 1.0
    #[serde(rename = "type")]
    pub kind: WeaknessKind,
    pub potential_remedies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationItem {
    pub weakness: String,
    pub remedies: Vec<String>,
    pub priority: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaknessSummary {
    pub total_weaknesses: usize,
    pub critical_weaknesses: usize,
    pub by_type: BTreeMap<WeaknessKind, Vec<Weakness>>,
    pub remediation_priority: Vec<RemediationItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Aggressive,
    Defensive,
    Balanced,
    PrecedentFocused,
    PolicyBased,
}

impl StrategyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyType::Aggressive => "aggressive",
            StrategyType::Defensive => "defensive",
            StrategyType::Balanced => "balanced",
            StrategyType::PrecedentFocused => "precedent_focused",
            StrategyType::PolicyBased => "policy_based",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "type")]
    pub kind: StrategyType,
    pub description: String,
    pub recommended_actions: Vec<String>,
    pub priority: u32,
    pub success_probability: f64,
}

impl Strategy {
    pub const PRIMARY_PRIORITY: u32 = 1;

    pub fn is_primary(&self) -> bool {
        self.priority == Self::PRIMARY_PRIORITY
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsequentHistory {
    pub overruled: bool,
    pub questioned: bool,
    pub followed: u32,
    pub cited: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecedentialValue {
    pub court_level: String,
    pub citation_count: usize,
    pub subsequent_history: SubsequentHistory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationCount {
    pub citation: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterCount {
    pub reporter: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationAnalysis {
    pub total_citations: usize,
    /// Distinct citations in first-seen order
    pub citation_frequency: Vec<CitationCount>,
    pub citation_patterns: Vec<ReporterCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeFactors {
    pub strength: f64,
    pub precedent: f64,
}

/// Outcome estimate; `error` is set when the estimate fell back to defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrediction {
    pub probability: f64,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<OutcomeFactors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutcomePrediction {
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            probability: 0.5,
            confidence: 0.0,
            factors: None,
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalysis {
    pub relevance_score: f64,
    pub precedential_value: PrecedentialValue,
    pub key_points: Vec<String>,
    pub citation_analysis: CitationAnalysis,
    pub outcome_prediction: OutcomePrediction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub prosecution: f64,
    pub defense: f64,
}

/// Conflict links recorded on one argument at registration time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictLink {
    pub side: Side,
    pub argument: String,
    pub countered_by: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub prosecution_arguments: usize,
    pub defense_arguments: usize,
    pub shared_facts: usize,
    pub disputed_facts: usize,
    pub strength_analysis: StrengthAnalysis,
    pub conflicts: Vec<ConflictLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageMetric {
    pub stage: String,
    pub elapsed_us: u64,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub case_id: Option<String>,
    pub weights: WeightVector,
    pub relevance_score: f64,
    pub analysis: CaseAnalysis,
    pub weaknesses: Vec<Weakness>,
    pub weakness_summary: WeaknessSummary,
    pub strategies: Vec<Strategy>,
    pub tracks: TrackSummary,
    pub metrics: Vec<StageMetric>,
    pub evaluated_at: i64,
}

impl EvaluationReport {
    pub fn primary_strategy(&self) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.is_primary())
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Case Evaluation Report: {}\n",
            self.case_id.as_deref().unwrap_or("unknown")
        ));
        output.push_str(&"=".repeat(60));
        output.push_str("\n\n");

        output.push_str(&format!("Relevance: {:.3}\n", self.relevance_score));
        let outcome = &self.analysis.outcome_prediction;
        output.push_str(&format!(
            "Outcome: probability {:.3}, confidence {:.3}\n",
            outcome.probability, outcome.confidence
        ));
        if let Some(error) = &outcome.error {
            output.push_str(&format!("    Degraded: {}\n", error));
        }
        output.push_str(&format!(
            "Court level: {} ({} citations)\n\n",
            self.analysis.precedential_value.court_level,
            self.analysis.precedential_value.citation_count
        ));

        output.push_str("Factor Weights:\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for (factor, weight) in self.weights.entries() {
            output.push_str(&format!("  {:<20} {:.3}\n", factor, weight));
        }

        output.push_str("\nStrategies:\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for strategy in &self.strategies {
            let marker = if strategy.is_primary() { "*" } else { " " };
            output.push_str(&format!(
                "{} [{}] {} (p={:.2})\n",
                marker, strategy.priority, strategy.kind, strategy.success_probability
            ));
            for action in &strategy.recommended_actions {
                output.push_str(&format!("    - {}\n", action));
            }
        }

        output.push_str(&format!(
            "\nWeaknesses: {} total, {} critical\n",
            self.weakness_summary.total_weaknesses, self.weakness_summary.critical_weaknesses
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for weakness in &self.weaknesses {
            output.push_str(&format!(
                "  {:.1} {} - {}\n",
                weakness.severity, weakness.kind, weakness.description
            ));
        }

        let tracks = &self.tracks;
        output.push_str(&format!(
            "\nTracks: prosecution {} (strength {:.2}), defense {} (strength {:.2})\n",
            tracks.prosecution_arguments,
            tracks.strength_analysis.prosecution,
            tracks.defense_arguments,
            tracks.strength_analysis.defense
        ));
        for link in &tracks.conflicts {
            output.push_str(&format!(
                "  {} argument \"{}\" countered by {} opposing argument(s)\n",
                link.side,
                link.argument,
                link.countered_by.len()
            ));
        }

        output
    }
}
