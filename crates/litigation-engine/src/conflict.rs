//! Dual-track argument registry with conflict detection
//!
//! Each side keeps its arguments in insertion order. Registering an argument
//! compares it against the opposing track only; a hit is recorded on the new
//! argument and earlier arguments are never touched.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared_types::{
    Argument, ConflictLink, DisputedPositions, Side, StrengthAnalysis, TrackSummary,
};
use tracing::{debug, warn};

use crate::config::ConflictConfig;
use crate::patterns::{contains_term, POLARITY_PAIRS};
use crate::similarity::{checked_similarity, SimilarityProvider};

pub struct ArgumentTracks {
    prosecution: Vec<Argument>,
    defense: Vec<Argument>,
    shared_facts: Vec<String>,
    disputed_facts: BTreeMap<String, DisputedPositions>,
    similarity: Arc<dyn SimilarityProvider>,
    threshold: f64,
}

impl ArgumentTracks {
    pub fn new(config: &ConflictConfig, similarity: Arc<dyn SimilarityProvider>) -> Self {
        Self {
            prosecution: Vec::new(),
            defense: Vec::new(),
            shared_facts: Vec::new(),
            disputed_facts: BTreeMap::new(),
            similarity,
            threshold: config.similarity_threshold,
        }
    }

    /// Add an argument to `side`, linking it to conflicting opposing arguments.
    ///
    /// Returns the stored argument with `counter_arguments` filled in.
    pub fn register(&mut self, mut argument: Argument, side: Side) -> &Argument {
        let counters: Vec<String> = self
            .track(side.opposing())
            .iter()
            .filter(|existing| self.conflicts(&argument, existing))
            .map(|existing| existing.text.clone())
            .collect();

        if !counters.is_empty() {
            debug!(side = %side, conflicts = counters.len(), "argument conflicts with opposing track");
        }
        argument.counter_arguments.extend(counters);

        let track = self.track_mut(side);
        track.push(argument);
        &track[track.len() - 1]
    }

    fn conflicts(&self, new: &Argument, existing: &Argument) -> bool {
        if new.kind != existing.kind {
            return false;
        }

        let score = match checked_similarity(self.similarity.as_ref(), &new.text, &existing.text) {
            Ok(score) => score,
            Err(err) => {
                warn!("similarity check failed, treating as no conflict: {}", err);
                return false;
            }
        };

        score > self.threshold && opposing_polarity(&new.text, &existing.text)
    }

    pub fn track(&self, side: Side) -> &[Argument] {
        match side {
            Side::Prosecution => &self.prosecution,
            Side::Defense => &self.defense,
        }
    }

    fn track_mut(&mut self, side: Side) -> &mut Vec<Argument> {
        match side {
            Side::Prosecution => &mut self.prosecution,
            Side::Defense => &mut self.defense,
        }
    }

    /// Mean strength of a side's arguments, 0.0 when the side has none
    pub fn track_strength(&self, side: Side) -> f64 {
        let track = self.track(side);
        if track.is_empty() {
            return 0.0;
        }
        track.iter().map(|a| a.strength).sum::<f64>() / track.len() as f64
    }

    pub fn add_shared_fact(&mut self, fact: impl Into<String>) {
        self.shared_facts.push(fact.into());
    }

    pub fn add_disputed_fact(
        &mut self,
        fact: impl Into<String>,
        prosecution_view: impl Into<String>,
        defense_view: impl Into<String>,
    ) {
        self.disputed_facts.insert(
            fact.into(),
            DisputedPositions {
                prosecution: prosecution_view.into(),
                defense: defense_view.into(),
            },
        );
    }

    pub fn disputed_facts(&self) -> &BTreeMap<String, DisputedPositions> {
        &self.disputed_facts
    }

    pub fn strength_analysis(&self) -> StrengthAnalysis {
        StrengthAnalysis {
            prosecution: self.track_strength(Side::Prosecution),
            defense: self.track_strength(Side::Defense),
        }
    }

    pub fn summary(&self) -> TrackSummary {
        let conflicts = [Side::Prosecution, Side::Defense]
            .into_iter()
            .flat_map(|side| {
                self.track(side)
                    .iter()
                    .filter(|a| !a.counter_arguments.is_empty())
                    .map(move |a| ConflictLink {
                        side,
                        argument: a.text.clone(),
                        countered_by: a.counter_arguments.clone(),
                    })
            })
            .collect();

        TrackSummary {
            prosecution_arguments: self.prosecution.len(),
            defense_arguments: self.defense.len(),
            shared_facts: self.shared_facts.len(),
            disputed_facts: self.disputed_facts.len(),
            strength_analysis: self.strength_analysis(),
            conflicts,
        }
    }
}

/// True when one text carries the positive term of a pair and the other the negative
pub fn opposing_polarity(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    POLARITY_PAIRS.iter().any(|(positive, negative)| {
        (contains_term(&a, positive) && contains_term(&b, negative))
            || (contains_term(&a, negative) && contains_term(&b, positive))
    })
}
