//! Semantic similarity capability
//!
//! Conflict detection only needs a bounded score for two text spans. The
//! engine ships a lexical implementation; an embedding-backed service can be
//! plugged in through [`SimilarityProvider`].

use std::collections::HashSet;

use crate::error::{EngineError, Result};
use crate::patterns::tokenize;

/// Trait for similarity backends
pub trait SimilarityProvider: Send + Sync {
    /// Similarity of two texts in `[0, 1]`; higher means more alike.
    ///
    /// Implementations report failures as `Err` and must not panic.
    fn similarity(&self, a: &str, b: &str) -> Result<f64>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Cosine similarity over the sets of lowercase word tokens
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalSimilarity;

impl LexicalSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityProvider for LexicalSimilarity {
    fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let left: HashSet<String> = tokenize(a).into_iter().collect();
        let right: HashSet<String> = tokenize(b).into_iter().collect();

        if left.is_empty() || right.is_empty() {
            return Ok(0.0);
        }

        let shared = left.intersection(&right).count() as f64;
        let norm = ((left.len() * right.len()) as f64).sqrt();
        Ok((shared / norm).min(1.0))
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Validate a provider's output, mapping anything outside `[0, 1]` to an error
pub fn checked_similarity(provider: &dyn SimilarityProvider, a: &str, b: &str) -> Result<f64> {
    let score = provider.similarity(a, b)?;
    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(EngineError::Capability(format!(
            "{} similarity returned out-of-range value {}",
            provider.name(),
            score
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl SimilarityProvider for Fixed {
        fn similarity(&self, _a: &str, _b: &str) -> Result<f64> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_identical_texts_score_one() {
        let score = LexicalSimilarity::new()
            .similarity("The evidence supports intent", "the evidence SUPPORTS intent")
            .unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let score = LexicalSimilarity::new()
            .similarity("alpha beta", "gamma delta")
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(LexicalSimilarity::new().similarity("", "text").unwrap(), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {the, evidence, supports, intent} vs {the, evidence, opposes, intent}
        let score = LexicalSimilarity::new()
            .similarity("The evidence supports intent", "The evidence opposes intent")
            .unwrap();
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_checked_similarity_rejects_out_of_range() {
        assert!(checked_similarity(&Fixed(1.5), "a", "b").is_err());
        assert!(checked_similarity(&Fixed(f64::NAN), "a", "b").is_err());
        assert_eq!(checked_similarity(&Fixed(0.9), "a", "b").unwrap(), 0.9);
    }
}
