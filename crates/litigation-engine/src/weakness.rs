//! Weakness detection over an argument collection
//!
//! Every check emits [`Weakness`] values with a fixed severity and a fixed
//! set of remedies. Results are ordered by severity, highest first; equal
//! severities keep the order in which they were found.

use std::collections::BTreeMap;

use shared_types::{ArgumentRecord, RemediationItem, Weakness, WeaknessKind, WeaknessSummary};
use tracing::{debug, warn};

use crate::config::{EngineConfig, WeaknessConfig};
use crate::patterns::{contains_term, split_sentences, FALLACY_MARKERS};
use crate::validation::validate_argument;

const EVIDENCE_GAP_SEVERITY: f64 = 0.8;
const EVIDENCE_QUALITY_SEVERITY: f64 = 0.7;
const LOGICAL_FLAW_SEVERITY: f64 = 0.6;
const PRECEDENT_SEVERITY: f64 = 0.5;

/// Remedies attached to each weakness kind
pub fn remedies(kind: WeaknessKind) -> &'static [&'static str] {
    match kind {
        WeaknessKind::EvidenceGap => &[
            "Gather additional documentary evidence",
            "Identify potential witnesses",
            "Consider expert testimony",
        ],
        WeaknessKind::EvidenceQuality => &[
            "Strengthen chain of custody",
            "Obtain corroborating evidence",
            "Address authentication issues",
        ],
        WeaknessKind::LogicalFlaw => &[
            "Restructure argument logic",
            "Address causal relationships",
            "Strengthen logical connections",
        ],
        WeaknessKind::PrecedentWeakness => &[
            "Find more analogous cases",
            "Address distinguishing factors",
            "Emphasize policy considerations",
        ],
    }
}

fn weakness(kind: WeaknessKind, severity: f64, description: impl Into<String>) -> Weakness {
    Weakness {
        description: description.into(),
        severity,
        kind,
        potential_remedies: remedies(kind).iter().map(|r| r.to_string()).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct WeaknessAnalyzer {
    config: WeaknessConfig,
}

impl WeaknessAnalyzer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.weakness.clone(),
        }
    }

    /// Analyze every valid argument; invalid ones are skipped with a warning
    pub fn analyze(&self, arguments: &[ArgumentRecord]) -> Vec<Weakness> {
        let mut weaknesses = Vec::new();

        for (index, argument) in arguments.iter().enumerate() {
            if let Err(err) = validate_argument(argument) {
                warn!(index, "Skipping invalid argument: {}", err);
                continue;
            }
            weaknesses.extend(self.evidence_weaknesses(argument));
            weaknesses.extend(logical_weaknesses(argument));
            weaknesses.extend(precedent_weaknesses(argument));
        }

        // sort_by is stable
        weaknesses.sort_by(|a, b| b.severity.total_cmp(&a.severity));
        debug!(
            arguments = arguments.len(),
            weaknesses = weaknesses.len(),
            "weakness analysis complete"
        );
        weaknesses
    }

    fn evidence_weaknesses(&self, argument: &ArgumentRecord) -> Vec<Weakness> {
        let mut found = Vec::new();

        if argument.evidence.as_ref().map_or(true, |e| e.is_empty()) {
            found.push(weakness(
                WeaknessKind::EvidenceGap,
                EVIDENCE_GAP_SEVERITY,
                "Lack of supporting evidence",
            ));
        }

        if let Some(quality) = argument.evidence_quality {
            if quality < self.config.evidence_quality_floor {
                found.push(weakness(
                    WeaknessKind::EvidenceQuality,
                    EVIDENCE_QUALITY_SEVERITY,
                    "Low quality or unreliable evidence",
                ));
            }
        }

        found
    }

    pub fn summary(&self, weaknesses: &[Weakness]) -> WeaknessSummary {
        let mut by_type: BTreeMap<WeaknessKind, Vec<Weakness>> = BTreeMap::new();
        for w in weaknesses {
            by_type.entry(w.kind).or_default().push(w.clone());
        }

        let mut ordered: Vec<&Weakness> = weaknesses.iter().collect();
        ordered.sort_by(|a, b| b.severity.total_cmp(&a.severity));

        WeaknessSummary {
            total_weaknesses: weaknesses.len(),
            critical_weaknesses: weaknesses
                .iter()
                .filter(|w| w.severity > self.config.critical_severity)
                .count(),
            by_type,
            remediation_priority: ordered
                .into_iter()
                .map(|w| RemediationItem {
                    weakness: w.description.clone(),
                    remedies: w.potential_remedies.clone(),
                    priority: w.severity,
                })
                .collect(),
        }
    }
}

/// One weakness per (sentence, fallacy marker) hit
fn logical_weaknesses(argument: &ArgumentRecord) -> Vec<Weakness> {
    let text = argument.text.as_deref().unwrap_or_default();

    split_sentences(text)
        .into_iter()
        .flat_map(|sentence| {
            let lower = sentence.to_lowercase();
            FALLACY_MARKERS
                .iter()
                .filter(move |marker| contains_term(&lower, marker))
                .map(|marker| {
                    weakness(
                        WeaknessKind::LogicalFlaw,
                        LOGICAL_FLAW_SEVERITY,
                        format!("Potential logical fallacy: {}", marker),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn precedent_weaknesses(argument: &ArgumentRecord) -> Vec<Weakness> {
    argument
        .precedents
        .iter()
        .filter(|p| p.distinguishable)
        .map(|p| {
            let description = match &p.citation {
                Some(citation) => format!("Distinguishable precedent: {}", citation),
                None => "Distinguishable precedent".to_string(),
            };
            weakness(WeaknessKind::PrecedentWeakness, PRECEDENT_SEVERITY, description)
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::ArgumentType;

    proptest! {
        /// Property: arbitrary text never panics and output stays sorted
        #[test]
        fn analyze_handles_arbitrary_text(text in "[a-z]\\PC{0,200}", quality in proptest::option::of(0.0f64..1.0)) {
            let record = ArgumentRecord {
                text: Some(text),
                kind: Some(ArgumentType::Policy),
                evidence_quality: quality,
                ..Default::default()
            };
            let weaknesses = WeaknessAnalyzer::new(&EngineConfig::default()).analyze(&[record]);
            prop_assert!(weaknesses.windows(2).all(|w| w[0].severity >= w[1].severity));
            prop_assert!(weaknesses.iter().any(|w| w.kind == WeaknessKind::EvidenceGap));
        }
    }
}
