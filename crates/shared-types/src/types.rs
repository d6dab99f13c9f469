use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseMetadata {
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>, // Filing date, "YYYY-MM-DD"
    #[serde(deserialize_with = "lenient")]
    pub court: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub case_number: Option<String>,
}

/// A case as delivered by retrieval. Every field may be missing, and a value
/// of the wrong shape decodes as the field's default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub metadata: Option<CaseMetadata>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub content: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub citations: Vec<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub context_similarity: Option<f64>,
    /// Number of times other opinions cite this case
    #[serde(deserialize_with = "lenient")]
    pub citation_count: Option<u32>,
    #[serde(flatten)]
    pub impact: ImpactFlags,
    #[serde(deserialize_with = "argument_records")]
    pub arguments: Vec<ArgumentRecord>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub shared_facts: Vec<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub disputed_facts: BTreeMap<String, DisputedPositions>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub signals: StrategySignals,
}

impl CaseRecord {
    pub fn date(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.date.as_deref())
    }

    pub fn court(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.court.as_deref())
    }

    /// True when the record carries nothing an evaluation could use
    pub fn is_empty(&self) -> bool {
        self.metadata.is_none()
            && self.content.trim().is_empty()
            && self.citations.is_empty()
            && self.arguments.is_empty()
    }
}

/// Boolean markers contributing to outcome impact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactFlags {
    #[serde(deserialize_with = "lenient_or_default")]
    pub precedent_setting: bool,
    #[serde(deserialize_with = "lenient_or_default")]
    pub overturned_previous: bool,
    #[serde(deserialize_with = "lenient_or_default")]
    pub widely_cited: bool,
    #[serde(deserialize_with = "lenient_or_default")]
    pub current_relevance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputedPositions {
    pub prosecution: String,
    pub defense: String,
}

/// Externally supplied strength signals consumed by strategy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySignals {
    #[serde(deserialize_with = "lenient")]
    pub evidence_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub precedent_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub coherence_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub counter_argument_strength: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub opposing_evidence_strength: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Prosecution,
    Defense,
}

impl Side {
    pub fn opposing(self) -> Side {
        match self {
            Side::Prosecution => Side::Defense,
            Side::Defense => Side::Prosecution,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Prosecution => "prosecution",
            Side::Defense => "defense",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    Factual,
    Legal,
    Procedural,
    Policy,
}

impl ArgumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::Factual => "factual",
            ArgumentType::Legal => "legal",
            ArgumentType::Procedural => "procedural",
            ArgumentType::Policy => "policy",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "factual" => Ok(ArgumentType::Factual),
            "legal" => Ok(ArgumentType::Legal),
            "procedural" => Ok(ArgumentType::Procedural),
            "policy" => Ok(ArgumentType::Policy),
            other => Err(format!("unknown argument type: {}", other)),
        }
    }
}

/// A precedent cited in support of an argument
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecedentRef {
    pub citation: Option<String>,
    pub distinguishable: bool,
}

/// Loosely-typed argument as found in case data.
///
/// Unrecognized or mistyped values decode as `None` so that validation can
/// skip the record instead of rejecting the whole case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentRecord {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<ArgumentType>,
    #[serde(deserialize_with = "evidence_items")]
    pub evidence: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub evidence_quality: Option<f64>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub precedents: Vec<PrecedentRef>,
    #[serde(deserialize_with = "lenient")]
    pub strength: Option<f64>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub supporting_citations: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub side: Option<Side>,
}

/// Decode `T` when the value fits, otherwise `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Every argument entry keeps its position; entries that are not objects
/// decode as an empty record, which validation then skips.
fn argument_records<'de, D>(deserializer: D) -> Result<Vec<ArgumentRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

/// Evidence as a list of items. A scalar counts as one item when truthy;
/// `false`, `0`, `""` and empty containers count as no evidence.
fn evidence_items<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Array(items) => items.into_iter().map(item_text).collect(),
        Value::Bool(false) => Vec::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => Vec::new(),
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => vec![item_text(other)],
    };
    Ok(Some(items))
}

fn item_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// An argument registered on one side's track.
///
/// `counter_arguments` is append-only: conflict detection pushes the texts of
/// opposing arguments found to contradict this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub strength: f64,
    pub supporting_citations: Vec<String>,
    pub counter_arguments: Vec<String>,
}

impl Argument {
    pub fn new(text: impl Into<String>, kind: ArgumentType, strength: f64) -> Self {
        Self {
            text: text.into(),
            kind,
            strength: if strength.is_finite() {
                strength.clamp(0.0, 1.0)
            } else {
                0.0
            },
            supporting_citations: Vec::new(),
            counter_arguments: Vec::new(),
        }
    }

    pub fn with_citations(mut self, citations: Vec<String>) -> Self {
        self.supporting_citations = citations;
        self
    }

    /// Build a track argument from a record; `None` without text or type
    pub fn from_record(record: &ArgumentRecord) -> Option<Self> {
        let text = record.text.as_ref()?;
        let kind = record.kind?;
        Some(
            Argument::new(text.clone(), kind, record.strength.unwrap_or(0.5))
                .with_citations(record.supporting_citations.clone()),
        )
    }
}

/// Normalized weights over the five case factors. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub relevance: f64,
    pub citation_frequency: f64,
    pub court_hierarchy: f64,
    pub outcome_impact: f64,
    pub temporal_relevance: f64,
}

impl WeightVector {
    pub const FACTORS: [&'static str; 5] = [
        "relevance",
        "citation_frequency",
        "court_hierarchy",
        "outcome_impact",
        "temporal_relevance",
    ];

    pub fn uniform() -> Self {
        Self {
            relevance: 0.2,
            citation_frequency: 0.2,
            court_hierarchy: 0.2,
            outcome_impact: 0.2,
            temporal_relevance: 0.2,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        [
            self.relevance,
            self.citation_frequency,
            self.court_hierarchy,
            self.outcome_impact,
            self.temporal_relevance,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }

    /// (factor name, weight) pairs in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FACTORS.into_iter().zip(self.values())
    }
}
