//! Lexical tables and matching helpers shared by the analysis stages

use lazy_static::lazy_static;
use regex::Regex;

/// Opposing stance terms: (positive, negative)
pub const POLARITY_PAIRS: &[(&str, &str)] = &[
    ("supports", "opposes"),
    ("proves", "disproves"),
    ("confirms", "contradicts"),
];

/// Marker phrases for common logical fallacies
pub const FALLACY_MARKERS: &[&str] = &[
    "circular reasoning",
    "false equivalence",
    "hasty generalization",
];

/// Words and phrases that mark an argumentative sentence
pub const ARGUMENT_INDICATORS: &[&str] = &[
    "therefore",
    "thus",
    "hence",
    "consequently",
    "because",
    "since",
    "as",
    "given that",
    "argues that",
    "contends that",
    "claims that",
];

pub const SUPPORT_INDICATORS: &[&str] = &["because", "since", "as"];

pub const COUNTER_INDICATORS: &[&str] = &["however", "nevertheless", "although", "but"];

pub const STATUTORY_PHRASES: &[&str] = &["statute requires", "law states", "according to section"];

pub const PRECEDENTIAL_PHRASES: &[&str] =
    &["court held", "precedent establishes", "as decided in"];

pub const FACTUAL_PHRASES: &[&str] = &["evidence shows", "facts demonstrate", "record indicates"];

pub const POLICY_PHRASES: &[&str] = &["public policy", "legislative intent", "purpose of the law"];

lazy_static! {
    /// Holding statements, captured up to the terminating period
    pub static ref HOLDING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(the court holds that[^.\n]*)\.").unwrap(),
        Regex::new(r"(?i)(we hold that[^.\n]*)\.").unwrap(),
        Regex::new(r"(?i)(it is hereby held that[^.\n]*)\.").unwrap(),
    ];

    /// Reasoning spans, captured up to the terminating period
    pub static ref REASONING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(\bbecause\b[^.\n]*)\.").unwrap(),
        Regex::new(r"(?i)(\btherefore\b[^.\n]*)\.").unwrap(),
        Regex::new(r"(?i)(\bconsequently\b[^.\n]*)\.").unwrap(),
    ];

    /// Legal reasoning openers
    pub static ref LEGAL_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"The Court (holds|finds|concludes)").unwrap(),
        Regex::new(r"(Plaintiff|Defendant) argues that").unwrap(),
        Regex::new(r"We conclude that").unwrap(),
        Regex::new(r"It follows that").unwrap(),
    ];

    /// Sentences that state a conclusion
    pub static ref CONCLUSION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^Therefore,").unwrap(),
        Regex::new(r"^Thus,").unwrap(),
        Regex::new(r"^Accordingly,").unwrap(),
        Regex::new(r"^In conclusion,").unwrap(),
    ];

    /// Volume / reporter / page, e.g. "410 U.S. 113" or "347 F.3d 1234"
    pub static ref REPORTER_CITATION: Regex = Regex::new(
        r"\b\d{1,4}\s+(U\.\s?S\.|S\.\s?Ct\.|L\.\s?Ed\.(?:\s?2d)?|F\.\s?Supp\.(?:\s?[23]d)?|F\.(?:2d|3d|4th)?|So\.(?:\s?[23]d)?|N\.E\.(?:[23]d)?|P\.(?:[23]d)?|A\.(?:[23]d)?)\s+\d{1,5}\b"
    )
    .unwrap();

    /// Reporter segment of a standalone citation string
    static ref REPORTER_SEGMENT: Regex = Regex::new(r"^\s*\d+\s+(.+?)\s+\d+\s*$").unwrap();
}

/// A single pattern hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Index of the pattern in the set that produced the match
    pub pattern: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Locate every match of every pattern, ordered by pattern then position.
///
/// When a pattern has a capture group, the first group is reported instead of
/// the whole match.
pub fn find_patterns(text: &str, patterns: &[Regex]) -> Vec<PatternMatch> {
    let mut matches = Vec::new();

    for (index, pattern) in patterns.iter().enumerate() {
        for caps in pattern.captures_iter(text) {
            let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            matches.push(PatternMatch {
                pattern: index,
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            });
        }
    }

    matches
}

/// Whole-word (or whole-phrase) containment on already-lowercased text
pub fn contains_term(text_lower: &str, term: &str) -> bool {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '_';

    text_lower.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = text_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = text_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// Count of table entries found in the text as whole terms
pub fn count_terms(text_lower: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| contains_term(text_lower, term))
        .count()
}

/// Split text into sentence-like units on terminal punctuation
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary || c == '\n' {
            let end = i + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() && sentence != "." {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Lowercase word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Reporter abbreviation of a citation string such as "410 U.S. 113"
pub fn reporter_of(citation: &str) -> Option<String> {
    REPORTER_SEGMENT
        .captures(citation)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("the record proves intent", "proves"));
        assert!(!contains_term("the record disproves intent", "proves"));
        assert!(contains_term("this is circular reasoning.", "circular reasoning"));
        assert!(!contains_term("has merit", "as"));
    }

    #[test]
    fn test_split_sentences() {
        let sentences =
            split_sentences("First point. Second point! Is it third? See 410 U.S. 113 too");
        assert_eq!(sentences.len(), 5);
        assert_eq!(sentences[0], "First point.");
        assert_eq!(sentences[2], "Is it third?");
    }

    #[test]
    fn test_split_sentences_keeps_decimals_together() {
        let sentences = split_sentences("Damages were 1.5 million. Next.");
        assert_eq!(sentences, vec!["Damages were 1.5 million.", "Next."]);
    }

    #[test]
    fn test_find_patterns_reports_capture_group() {
        let text = "We hold that the search was unlawful. The Court holds that notice was due.";
        let matches = find_patterns(text, &HOLDING_PATTERNS);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "The Court holds that notice was due");
        assert_eq!(matches[1].text, "We hold that the search was unlawful");
    }

    #[test]
    fn test_holding_requires_terminating_period() {
        assert!(find_patterns("We hold that", &HOLDING_PATTERNS).is_empty());
    }

    #[test]
    fn test_reporter_citation_detection() {
        let text = "See Roe v. Wade, 410 U.S. 113 (1973); Brown, 347 U.S. 483; Smith, 123 F.3d 456.";
        assert_eq!(REPORTER_CITATION.find_iter(text).count(), 3);
    }

    #[test]
    fn test_reporter_of() {
        assert_eq!(reporter_of("410 U.S. 113"), Some("U.S.".to_string()));
        assert_eq!(reporter_of("123 F. Supp. 2d 456"), Some("F. Supp. 2d".to_string()));
        assert_eq!(reporter_of("Brown v. Board"), None);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Evidence, PROVES intent!"), vec!["evidence", "proves", "intent"]);
    }
}
