//! Decision Source Port - where decision models come from.
//!
//! The application depends on this trait; adapters such as
//! `FileDecisionSource` read the model from outside the process.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ahp::{AhpError, DecisionModel};

/// Port for loading a decision model.
///
/// # Contract
///
/// Implementations must:
/// - Return a model whose item sets are duplicate-free
/// - Store every recorded judgment with its reciprocal
/// - Leave criteria without recorded alternative comparisons unfilled, so
///   ranking can report them as missing
pub trait DecisionSource: Send + Sync {
    /// Loads the decision model.
    fn load(&self) -> Result<DecisionModel, SourceError>;
}

/// Errors from decision sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Unsupported decision file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse decision document: {0}")]
    Parse(String),

    #[error("Invalid decision document: {0}")]
    Model(#[from] AhpError),
}
