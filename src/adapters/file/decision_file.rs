//! File Decision Source - reads a decision document from JSON or YAML.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ahp::DecisionModel;
use crate::ports::{DecisionSource, SourceError};

use super::DecisionDocument;

/// Maximum decision file size (1 MiB).
const MAX_DOCUMENT_BYTES: u64 = 1024 * 1024;

/// Supported document encodings, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(SourceError::UnsupportedFormat(format!(
                "'.{}' (expected .json, .yaml or .yml)",
                other
            ))),
        }
    }

    /// Parses a document in this format.
    pub fn parse(&self, content: &str) -> Result<DecisionDocument, SourceError> {
        match self {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))
            }
        }
    }
}

/// Reads a decision model from a file on disk.
///
/// # Usage
///
/// ```rust,ignore
/// let source = FileDecisionSource::new("decision.yaml");
/// let model = source.load()?;
/// ```
#[derive(Debug, Clone)]
pub struct FileDecisionSource {
    path: PathBuf,
    max_bytes: u64,
}

impl FileDecisionSource {
    /// Creates a source for `path` with the default size limit.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_bytes: MAX_DOCUMENT_BYTES,
        }
    }

    /// Overrides the size limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SourceError {
        SourceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DecisionSource for FileDecisionSource {
    fn load(&self) -> Result<DecisionModel, SourceError> {
        let format = DocumentFormat::from_path(&self.path)?;

        let size = fs::metadata(&self.path)
            .map_err(|e| self.io_error(e))?
            .len();
        if size > self.max_bytes {
            return Err(SourceError::TooLarge {
                path: self.path.clone(),
                size,
                limit: self.max_bytes,
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let document = format.parse(&content)?;

        tracing::debug!(
            path = %self.path.display(),
            criteria = document.criteria.len(),
            alternatives = document.alternatives.len(),
            "Loaded decision document"
        );

        Ok(document.into_model()?)
    }
}
