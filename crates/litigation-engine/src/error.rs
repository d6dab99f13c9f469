use thiserror::Error;

/// Errors raised while evaluating a case.
///
/// Only [`EngineError::EmptyCase`] escapes [`crate::LitigationEngine::evaluate`];
/// the other variants are recovered inside the stage that produced them.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed {field}: {value}")]
    MalformedValue { field: &'static str, value: String },

    #[error("External capability failed: {0}")]
    Capability(String),

    #[error("No case data to evaluate")]
    EmptyCase,

    #[error("Case JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
