//! ConsistencyReportHandler - current weights and CR of every comparison set.
//!
//! Unlike ranking, this never stops early: each matrix is evaluated on its
//! own so a presentation layer can show the status of all of them at once.

use serde::{Deserialize, Serialize};

use tracing::debug;

use crate::domain::ahp::{
    AhpError, ComparisonSet, ConsistencyGate, ConsistencyVerdict, DecisionModel, PriorityEngine,
    PriorityResult,
};

/// Status of one comparison set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyEntry {
    pub set: ComparisonSet,
    pub priorities: PriorityResult,
    pub verdict: ConsistencyVerdict,
}

/// Status of every comparison set in a model, criteria first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub threshold: f64,
    pub entries: Vec<ConsistencyEntry>,
}

impl ConsistencyReport {
    /// True if every set passed the gate.
    pub fn all_accepted(&self) -> bool {
        self.entries.iter().all(|e| e.verdict.is_accepted())
    }

    /// The first rejected entry in criteria order.
    pub fn first_rejection(&self) -> Option<&ConsistencyEntry> {
        self.entries.iter().find(|e| !e.verdict.is_accepted())
    }
}

/// Handler producing a consistency report.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyReportHandler {
    gate: ConsistencyGate,
}

impl ConsistencyReportHandler {
    pub fn new(gate: ConsistencyGate) -> Self {
        Self { gate }
    }

    /// Evaluates the criteria matrix and each per-criterion matrix.
    pub fn handle(&self, model: &DecisionModel) -> ConsistencyReport {
        let mut entries = Vec::with_capacity(model.criteria().len() + 1);
        entries.push(self.entry(
            ComparisonSet::Criteria,
            PriorityEngine::compute(model.criteria_matrix(), model.criteria().len()),
        ));

        for criterion in model.criteria().iter() {
            let set = ComparisonSet::alternatives(criterion);
            let entry = match model.alternatives_matrix(criterion) {
                Some(matrix) => self.entry(
                    set,
                    PriorityEngine::compute(matrix, model.alternatives().len()),
                ),
                None => ConsistencyEntry {
                    set,
                    priorities: PriorityResult::empty(),
                    verdict: ConsistencyVerdict::Rejected {
                        message: AhpError::missing_comparisons(criterion).to_string(),
                    },
                },
            };
            entries.push(entry);
        }

        debug!(
            sets = entries.len(),
            rejected = entries.iter().filter(|e| !e.verdict.is_accepted()).count(),
            "Built consistency report"
        );

        ConsistencyReport {
            threshold: self.gate.threshold(),
            entries,
        }
    }

    fn entry(&self, set: ComparisonSet, priorities: PriorityResult) -> ConsistencyEntry {
        let verdict = self.gate.check(&priorities, &set);
        ConsistencyEntry {
            set,
            priorities,
            verdict,
        }
    }
}
