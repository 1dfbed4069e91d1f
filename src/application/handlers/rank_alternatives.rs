//! RankAlternativesHandler - runs one full AHP ranking.
//!
//! Validates the criteria matrix, then every per-criterion alternatives
//! matrix in criteria order, then synthesizes. Stops at the first failure
//! and reports only that one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::ahp::{
    AhpError, ComparisonMatrix, ComparisonSet, ConsistencyGate, DecisionModel, ItemKind,
    PipelineStage, PriorityEngine, PriorityResult, RankedAlternative, Synthesizer,
};
use crate::domain::foundation::StateMachine;

/// Command to rank the alternatives of a decision model.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub model: DecisionModel,
}

/// Priorities of the alternatives under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionPriorities {
    pub criterion: String,
    pub priorities: PriorityResult,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankAlternativesResult {
    /// Criteria weights and consistency.
    pub criteria: PriorityResult,
    /// Alternative weights per criterion, in criteria order.
    pub alternatives: Vec<CriterionPriorities>,
    /// Alternatives ordered by overall score.
    pub rankings: Vec<RankedAlternative>,
}

/// Handler for ranking alternatives.
#[derive(Debug, Clone, Default)]
pub struct RankAlternativesHandler {
    gate: ConsistencyGate,
}

impl RankAlternativesHandler {
    /// Creates a handler using the given consistency gate.
    pub fn new(gate: ConsistencyGate) -> Self {
        Self { gate }
    }

    /// Runs the pipeline. No partial result is returned on failure.
    ///
    /// # Errors
    /// - `EmptyInput` when there are no criteria or alternatives
    /// - `InvalidMatrix` when a matrix does not match its item set
    /// - `InconsistentJudgments` for the first set whose CR is too high
    /// - `MissingComparisons` when a criterion has no alternatives matrix
    pub fn handle(
        &self,
        cmd: &RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, AhpError> {
        let mut stage = PipelineStage::Idle;

        match self.run(&cmd.model, &mut stage) {
            Ok(result) => {
                info!(
                    criteria = cmd.model.criteria().len(),
                    alternatives = cmd.model.alternatives().len(),
                    top = result.rankings.first().map(|r| r.name.as_str()).unwrap_or(""),
                    "Ranked alternatives"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    failed_after = %stage,
                    code = %err.code(),
                    error = %err,
                    "Ranking halted"
                );
                Err(err)
            }
        }
    }

    fn run(
        &self,
        model: &DecisionModel,
        stage: &mut PipelineStage,
    ) -> Result<RankAlternativesResult, AhpError> {
        if model.criteria().is_empty() {
            return Err(AhpError::EmptyInput(ItemKind::Criteria));
        }
        if model.alternatives().is_empty() {
            return Err(AhpError::EmptyInput(ItemKind::Alternatives));
        }

        let criteria = self.evaluate(
            model.criteria_matrix(),
            model.criteria().len(),
            &ComparisonSet::Criteria,
        )?;
        *stage = stage.transition_to(PipelineStage::CriteriaValidated)?;

        let mut alternatives = Vec::with_capacity(model.criteria().len());
        for criterion in model.criteria().iter() {
            let matrix = model
                .alternatives_matrix(criterion)
                .ok_or_else(|| AhpError::missing_comparisons(criterion))?;
            let priorities = self.evaluate(
                matrix,
                model.alternatives().len(),
                &ComparisonSet::alternatives(criterion),
            )?;
            *stage = stage.transition_to(PipelineStage::PerCriterionValidated)?;

            alternatives.push(CriterionPriorities {
                criterion: criterion.to_string(),
                priorities,
            });
        }

        let by_criterion: HashMap<String, Vec<f64>> = alternatives
            .iter()
            .map(|c| (c.criterion.clone(), c.priorities.weights.clone()))
            .collect();
        let rankings = Synthesizer::synthesize(
            &criteria.weights,
            &by_criterion,
            model.alternatives(),
            model.criteria(),
        )?;
        *stage = stage.transition_to(PipelineStage::Synthesized)?;

        Ok(RankAlternativesResult {
            criteria,
            alternatives,
            rankings,
        })
    }

    /// Computes priorities for one matrix and passes them through the gate.
    fn evaluate(
        &self,
        matrix: &ComparisonMatrix,
        n: usize,
        set: &ComparisonSet,
    ) -> Result<PriorityResult, AhpError> {
        let result = PriorityEngine::try_compute(matrix, n).map_err(|err| match err {
            AhpError::InvalidMatrix { reason, .. } => AhpError::invalid_matrix(set, reason),
            other => other,
        })?;

        self.gate.ensure(&result, set)?;

        debug!(
            set = %set,
            consistency_ratio = result.consistency_ratio.unwrap_or_default(),
            "Comparison set accepted"
        );

        Ok(result)
    }
}
