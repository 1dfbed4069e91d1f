//! In-memory decision source, for tests and embedding callers.

use crate::domain::ahp::DecisionModel;
use crate::ports::{DecisionSource, SourceError};

/// Serves a model that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionSource {
    model: DecisionModel,
}

impl InMemoryDecisionSource {
    pub fn new(model: DecisionModel) -> Self {
        Self { model }
    }
}

impl DecisionSource for InMemoryDecisionSource {
    fn load(&self) -> Result<DecisionModel, SourceError> {
        Ok(self.model.clone())
    }
}
