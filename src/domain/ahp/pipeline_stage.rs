//! Stages of a full ranking run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Progress of one ranking run.
///
/// `Idle → CriteriaValidated → PerCriterionValidated* → Synthesized`.
/// Any failure returns the run to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Idle,
    CriteriaValidated,
    PerCriterionValidated,
    Synthesized,
}

impl StateMachine for PipelineStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PipelineStage::*;
        matches!(
            (self, target),
            (Idle, CriteriaValidated)
                | (CriteriaValidated, PerCriterionValidated)
                | (PerCriterionValidated, PerCriterionValidated)
                | (PerCriterionValidated, Synthesized)
                | (CriteriaValidated, Idle)
                | (PerCriterionValidated, Idle)
                | (Synthesized, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PipelineStage::*;
        match self {
            Idle => vec![CriteriaValidated],
            CriteriaValidated => vec![PerCriterionValidated, Idle],
            PerCriterionValidated => vec![PerCriterionValidated, Synthesized, Idle],
            Synthesized => vec![Idle],
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::CriteriaValidated => "criteria_validated",
            PipelineStage::PerCriterionValidated => "per_criterion_validated",
            PipelineStage::Synthesized => "synthesized",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::AhpError;
    use crate::domain::foundation::ErrorCode;

    const ALL: [PipelineStage; 4] = [
        PipelineStage::Idle,
        PipelineStage::CriteriaValidated,
        PipelineStage::PerCriterionValidated,
        PipelineStage::Synthesized,
    ];

    #[test]
    fn happy_path_is_allowed() {
        let stage = PipelineStage::Idle
            .transition_to(PipelineStage::CriteriaValidated)
            .and_then(|s| s.transition_to(PipelineStage::PerCriterionValidated))
            .and_then(|s| s.transition_to(PipelineStage::PerCriterionValidated))
            .and_then(|s| s.transition_to(PipelineStage::Synthesized));

        assert_eq!(stage, Ok(PipelineStage::Synthesized));
    }

    #[test]
    fn cannot_skip_criteria_validation() {
        assert!(PipelineStage::Idle
            .transition_to(PipelineStage::PerCriterionValidated)
            .is_err());
        assert!(PipelineStage::Idle
            .transition_to(PipelineStage::Synthesized)
            .is_err());
    }

    #[test]
    fn cannot_synthesize_without_per_criterion_validation() {
        let err = PipelineStage::CriteriaValidated
            .transition_to(PipelineStage::Synthesized)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        assert_eq!(
            AhpError::from(err).code(),
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn every_stage_past_idle_can_fall_back() {
        for stage in &ALL[1..] {
            assert!(stage.can_transition_to(&PipelineStage::Idle));
        }
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for stage in ALL {
            for target in ALL {
                assert_eq!(
                    stage.can_transition_to(&target),
                    stage.valid_transitions().contains(&target),
                    "{:?} -> {:?}",
                    stage,
                    target
                );
            }
        }
    }

    #[test]
    fn no_stage_is_terminal() {
        assert!(ALL.iter().all(|s| !s.is_terminal()));
    }
}
