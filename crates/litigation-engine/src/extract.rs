//! Sentence-level argument extraction and argument-family classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns::{
    contains_term, count_terms, split_sentences, tokenize, ARGUMENT_INDICATORS,
    CONCLUSION_PATTERNS, COUNTER_INDICATORS, FACTUAL_PHRASES, LEGAL_PATTERNS, POLICY_PHRASES,
    PRECEDENTIAL_PHRASES, REPORTER_CITATION, STATUTORY_PHRASES, SUPPORT_INDICATORS,
};

/// Broad family of a legal argument, decided by phrase votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentFamily {
    Statutory,
    Precedential,
    Factual,
    Policy,
    General,
}

impl ArgumentFamily {
    /// Families that have a phrase table, in tie-break order
    pub const VOTING: [ArgumentFamily; 4] = [
        ArgumentFamily::Statutory,
        ArgumentFamily::Precedential,
        ArgumentFamily::Factual,
        ArgumentFamily::Policy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentFamily::Statutory => "statutory",
            ArgumentFamily::Precedential => "precedential",
            ArgumentFamily::Factual => "factual",
            ArgumentFamily::Policy => "policy",
            ArgumentFamily::General => "general",
        }
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            ArgumentFamily::Statutory => STATUTORY_PHRASES,
            ArgumentFamily::Precedential => PRECEDENTIAL_PHRASES,
            ArgumentFamily::Factual => FACTUAL_PHRASES,
            ArgumentFamily::Policy => POLICY_PHRASES,
            ArgumentFamily::General => &[],
        }
    }
}

impl fmt::Display for ArgumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family with the most phrase hits; `General` when nothing matches
pub fn classify_argument(text: &str) -> ArgumentFamily {
    let lower = text.to_lowercase();
    let mut best = (ArgumentFamily::General, 0);

    for family in ArgumentFamily::VOTING {
        let votes = count_terms(&lower, family.phrases());
        if votes > best.1 {
            best = (family, votes);
        }
    }

    best.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArguments {
    pub main_arguments: Vec<String>,
    pub supporting_arguments: Vec<String>,
    pub counter_arguments: Vec<String>,
    pub conclusions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentStrength {
    pub citation_count: usize,
    pub precedent_references: Vec<String>,
    pub reasoning_indicators: usize,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentExtractor;

impl ArgumentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ExtractedArguments {
        let mut extracted = ExtractedArguments::default();

        for sentence in split_sentences(text) {
            let lower = sentence.to_lowercase();
            let words = tokenize(sentence);

            let indicated = ARGUMENT_INDICATORS
                .iter()
                .any(|indicator| contains_term(&lower, indicator));
            let legal = LEGAL_PATTERNS.iter().any(|p| p.is_match(sentence));
            if indicated || legal {
                extracted.main_arguments.push(sentence.to_string());
            }
            if has_word(&words, SUPPORT_INDICATORS) {
                extracted.supporting_arguments.push(sentence.to_string());
            }
            if has_word(&words, COUNTER_INDICATORS) {
                extracted.counter_arguments.push(sentence.to_string());
            }
            if CONCLUSION_PATTERNS.iter().any(|p| p.is_match(sentence)) {
                extracted.conclusions.push(sentence.to_string());
            }
        }

        extracted
    }

    /// Citation, precedent and reasoning signals for a single argument
    pub fn analyze_strength(&self, argument: &str) -> ArgumentStrength {
        let lower = argument.to_lowercase();
        let citation_count = REPORTER_CITATION.find_iter(argument).count();
        let precedent_references: Vec<String> = PRECEDENTIAL_PHRASES
            .iter()
            .filter(|phrase| contains_term(&lower, phrase))
            .map(|phrase| phrase.to_string())
            .collect();
        let reasoning_indicators = count_terms(&lower, ARGUMENT_INDICATORS);

        let confidence_score = confidence(
            citation_count,
            precedent_references.len(),
            reasoning_indicators,
        );

        ArgumentStrength {
            citation_count,
            precedent_references,
            reasoning_indicators,
            confidence_score,
        }
    }
}

fn has_word(words: &[String], table: &[&str]) -> bool {
    words.iter().any(|w| table.iter().any(|t| w == t))
}

// Saturating blend: 3 citations, 2 precedent phrases, 3 indicators each max out their share
fn confidence(citations: usize, precedents: usize, indicators: usize) -> f64 {
    let share = |count: usize, cap: usize| count.min(cap) as f64 / cap as f64;
    0.4 * share(citations, 3) + 0.3 * share(precedents, 2) + 0.3 * share(indicators, 3)
}
