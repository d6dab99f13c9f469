// Structural checks for incoming records
use shared_types::{ArgumentRecord, CaseRecord};

use crate::error::{EngineError, Result};

/// Check that a case carries metadata, content and citations.
///
/// Evaluation still runs on records that fail this check; the result only
/// tells callers which parts will be scored from defaults.
pub fn validate_case(case: &CaseRecord) -> Result<()> {
    if case.metadata.is_none() {
        return Err(EngineError::MissingField("metadata"));
    }
    if case.content.trim().is_empty() {
        return Err(EngineError::MissingField("content"));
    }
    if case.citations.is_empty() {
        return Err(EngineError::MissingField("citations"));
    }
    Ok(())
}

/// An argument needs text and a type to be analyzed. Evidence may be absent.
pub fn validate_argument(argument: &ArgumentRecord) -> Result<()> {
    match argument.text.as_deref() {
        None => return Err(EngineError::MissingField("text")),
        Some(text) if text.trim().is_empty() => return Err(EngineError::MissingField("text")),
        Some(_) => {}
    }
    if argument.kind.is_none() {
        return Err(EngineError::MissingField("type"));
    }
    if let Some(quality) = argument.evidence_quality {
        if !quality.is_finite() {
            return Err(EngineError::MalformedValue {
                field: "evidence_quality",
                value: quality.to_string(),
            });
        }
    }
    Ok(())
}
