pub mod report;
pub mod types;

pub use report::{
    CaseAnalysis, CitationAnalysis, CitationCount, ConflictLink, EvaluationReport,
    OutcomeFactors, OutcomePrediction, PrecedentialValue, RemediationItem, ReporterCount,
    StageMetric, Strategy, StrategyType, StrengthAnalysis, SubsequentHistory, TrackSummary,
    Weakness, WeaknessKind, WeaknessSummary,
};
pub use types::{
    Argument, ArgumentRecord, ArgumentType, CaseMetadata, CaseRecord, DisputedPositions,
    ImpactFlags, PrecedentRef, Side, StrategySignals, WeightVector,
};
