use std::fs;
use std::path::{Path, PathBuf};

use shared_types::CaseRecord;
use tracing::debug;

use crate::error::{EngineError, Result};

/// Trait for case retrieval backends
pub trait CaseSource: Send + Sync {
    /// Fetch the case identified by `locator`
    fn fetch_case(&self, locator: &str) -> Result<CaseRecord>;

    /// Get the name of this source
    fn name(&self) -> &str;
}

/// Reads case records from JSON files, relative to an optional base directory
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    base_dir: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(locator),
            None => Path::new(locator).to_path_buf(),
        }
    }
}

impl CaseSource for JsonFileSource {
    fn fetch_case(&self, locator: &str) -> Result<CaseRecord> {
        let path = self.resolve(locator);
        debug!(path = %path.display(), "loading case");
        let content = fs::read_to_string(&path)?;
        parse_case(&content)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Decode a case record from JSON text
pub fn parse_case(json: &str) -> Result<CaseRecord> {
    serde_json::from_str(json).map_err(EngineError::from)
}
