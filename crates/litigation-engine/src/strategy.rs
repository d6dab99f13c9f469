// Litigation strategy selection from aggregate strength signals
use shared_types::{Strategy, StrategySignals, StrategyType};
use tracing::debug;

use crate::config::{EngineConfig, StrategyConfig};

/// Signal value assumed when a strength signal is absent
const NEUTRAL_SIGNAL: f64 = 0.5;
const SUPPLEMENTARY_PRIORITY: u32 = 2;

/// Fixed description and action list for a strategy type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyTemplate {
    pub description: &'static str,
    pub actions: &'static [&'static str],
}

pub fn template(kind: StrategyType) -> StrategyTemplate {
    match kind {
        StrategyType::Aggressive => StrategyTemplate {
            description: "Focus on strong offensive arguments and direct challenges",
            actions: &[
                "Challenge opposing evidence validity",
                "Present strongest arguments first",
                "Emphasize favorable precedents",
            ],
        },
        StrategyType::Defensive => StrategyTemplate {
            description: "Build strong defensive position and counter-arguments",
            actions: &[
                "Strengthen procedural compliance",
                "Prepare detailed counter-arguments",
                "Focus on evidence reliability",
            ],
        },
        StrategyType::Balanced => StrategyTemplate {
            description: "Maintain balanced approach",
            actions: &[
                "Alternate between offensive and defensive points",
                "Address key issues systematically",
                "Maintain credibility through balanced presentation",
            ],
        },
        StrategyType::PrecedentFocused => StrategyTemplate {
            description: "Leverage strong precedential support",
            actions: &["Focus on precedent application", "Distinguish opposing cases"],
        },
        StrategyType::PolicyBased => StrategyTemplate {
            description: "Frame the dispute around legislative purpose and public policy",
            actions: &[
                "Develop legislative history",
                "Highlight policy consequences of the opposing reading",
            ],
        },
    }
}

pub fn build_strategy(kind: StrategyType, priority: u32, success_probability: f64) -> Strategy {
    let template = template(kind);
    Strategy {
        kind,
        description: template.description.to_string(),
        recommended_actions: template.actions.iter().map(|a| a.to_string()).collect(),
        priority,
        success_probability,
    }
}

#[derive(Debug, Clone)]
pub struct StrategyDecisionEngine {
    config: StrategyConfig,
}

impl StrategyDecisionEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.strategy.clone(),
        }
    }

    /// Primary strategy first, then supplementary strategies by priority
    pub fn decide(&self, signals: &StrategySignals) -> Vec<Strategy> {
        let case = case_strength(signals);
        let opposition = opposition_strength(signals);

        let mut strategies = vec![self.primary(case, opposition)];
        strategies.extend(self.supplementary(signals));
        // Priority 1 ranks highest; sort_by_key is stable
        strategies.sort_by_key(|s| s.priority);

        debug!(
            case_strength = case,
            opposition_strength = opposition,
            primary = %strategies.first().map_or("none", |s| s.kind.as_str()),
            total = strategies.len(),
            "strategies selected"
        );
        strategies
    }

    pub fn primary(&self, case_strength: f64, opposition_strength: f64) -> Strategy {
        let (kind, probability) = if case_strength > self.config.aggressive_case_floor
            && opposition_strength < self.config.aggressive_opposition_ceiling
        {
            (StrategyType::Aggressive, case_strength)
        } else if opposition_strength > self.config.defensive_opposition_floor {
            (StrategyType::Defensive, 1.0 - opposition_strength)
        } else {
            (
                StrategyType::Balanced,
                (case_strength + (1.0 - opposition_strength)) / 2.0,
            )
        };
        build_strategy(kind, Strategy::PRIMARY_PRIORITY, probability)
    }

    fn supplementary(&self, signals: &StrategySignals) -> Vec<Strategy> {
        let mut found = Vec::new();
        if let Some(precedent) = bounded(signals.precedent_score) {
            if precedent > self.config.precedent_floor {
                found.push(build_strategy(
                    StrategyType::PrecedentFocused,
                    SUPPLEMENTARY_PRIORITY,
                    precedent,
                ));
            }
        }
        found
    }
}

/// Mean of evidence, precedent and coherence scores
pub fn case_strength(signals: &StrategySignals) -> f64 {
    mean(&[
        signals.evidence_score,
        signals.precedent_score,
        signals.coherence_score,
    ])
}

/// Mean of counter-argument and opposing-evidence strength
pub fn opposition_strength(signals: &StrategySignals) -> f64 {
    mean(&[
        signals.counter_argument_strength,
        signals.opposing_evidence_strength,
    ])
}

/// A signal clamped into `[0, 1]`; non-finite values count as absent
fn bounded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(|v| v.clamp(0.0, 1.0))
}

fn mean(values: &[Option<f64>]) -> f64 {
    let total: f64 = values
        .iter()
        .map(|v| bounded(*v).unwrap_or(NEUTRAL_SIGNAL))
        .sum();
    total / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine() -> StrategyDecisionEngine {
        StrategyDecisionEngine::new(&EngineConfig::default())
    }

    #[test]
    fn test_strong_case_weak_opposition_is_aggressive() {
        let strategy = engine().primary(0.8, 0.3);
        assert_eq!(strategy.kind, StrategyType::Aggressive);
        assert_eq!(strategy.success_probability, 0.8);
        assert!(strategy.is_primary());
    }

    #[test]
    fn test_strong_opposition_is_defensive() {
        let strategy = engine().primary(0.4, 0.8);
        assert_eq!(strategy.kind, StrategyType::Defensive);
        assert!((strategy.success_probability - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_otherwise_balanced() {
        let strategy = engine().primary(0.6, 0.6);
        assert_eq!(strategy.kind, StrategyType::Balanced);
        assert!((strategy.success_probability - 0.5).abs() < 1e-12);
        assert_eq!(
            strategy.recommended_actions[0],
            "Alternate between offensive and defensive points"
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(engine().primary(0.7, 0.3).kind, StrategyType::Balanced);
        assert_eq!(engine().primary(0.9, 0.5).kind, StrategyType::Balanced);
        assert_eq!(engine().primary(0.5, 0.7).kind, StrategyType::Balanced);
    }

    #[test]
    fn test_absent_signals_are_neutral() {
        let signals = StrategySignals::default();
        assert_eq!(case_strength(&signals), 0.5);
        assert_eq!(opposition_strength(&signals), 0.5);

        let strategies = engine().decide(&signals);
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].kind, StrategyType::Balanced);
    }

    #[test]
    fn test_strong_precedent_adds_supplementary_strategy() {
        let signals = StrategySignals {
            evidence_score: Some(0.9),
            precedent_score: Some(0.9),
            coherence_score: Some(0.9),
            counter_argument_strength: Some(0.2),
            opposing_evidence_strength: Some(0.2),
        };
        let strategies = engine().decide(&signals);

        let kinds: Vec<StrategyType> = strategies.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StrategyType::Aggressive, StrategyType::PrecedentFocused]);
        assert_eq!(strategies[1].priority, 2);
        assert_eq!(strategies[1].success_probability, 0.9);
        assert_eq!(strategies.iter().filter(|s| s.is_primary()).count(), 1);
    }

    #[test]
    fn test_precedent_at_floor_adds_nothing() {
        let signals = StrategySignals {
            precedent_score: Some(0.7),
            ..Default::default()
        };
        assert_eq!(engine().decide(&signals).len(), 1);
    }

    #[test]
    fn test_out_of_range_signals_are_clamped() {
        let signals = StrategySignals {
            evidence_score: Some(1.5),
            precedent_score: Some(1.4),
            coherence_score: Some(1.5),
            counter_argument_strength: Some(-0.5),
            opposing_evidence_strength: Some(f64::NAN),
        };
        assert_eq!(case_strength(&signals), 1.0);
        assert_eq!(opposition_strength(&signals), 0.25);

        let strategies = engine().decide(&signals);
        let kinds: Vec<StrategyType> = strategies.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StrategyType::Aggressive, StrategyType::PrecedentFocused]);
        assert_eq!(strategies[0].success_probability, 1.0);
        assert_eq!(strategies[1].success_probability, 1.0);
    }

    #[test]
    fn test_non_finite_precedent_adds_nothing() {
        let signals = StrategySignals {
            precedent_score: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(engine().decide(&signals).len(), 1);
    }

    #[test]
    fn test_every_type_has_a_template() {
        for kind in [
            StrategyType::Aggressive,
            StrategyType::Defensive,
            StrategyType::Balanced,
            StrategyType::PrecedentFocused,
            StrategyType::PolicyBased,
        ] {
            let template = template(kind);
            assert!(!template.description.is_empty());
            assert!(!template.actions.is_empty());
        }
    }
}
