//! State machine trait for stage enums.
//!
//! Gives stage-like enums a single way to validate and perform transitions.

use super::ValidationError;

/// Trait for enums whose values move through a fixed set of transitions.
///
/// Implementors list the allowed moves; `transition_to` and `is_terminal`
/// come for free.
///
/// ```ignore
/// let stage = PipelineStage::Idle.transition_to(PipelineStage::CriteriaValidated)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all states reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, failing if it is not allowed.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// True when no outgoing transition exists.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Closed,
        Locked,
        Welded,
    }

    impl StateMachine for Door {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Door::*;
            match self {
                Open => vec![Closed],
                Closed => vec![Open, Locked, Welded],
                Locked => vec![Closed],
                Welded => vec![],
            }
        }
    }

    #[test]
    fn allowed_transition_returns_target() {
        assert_eq!(Door::Open.transition_to(Door::Closed), Ok(Door::Closed));
    }

    #[test]
    fn disallowed_transition_is_an_error() {
        let err = Door::Open.transition_to(Door::Locked).unwrap_err();
        assert_eq!(err.to_string(), "Cannot transition from Open to Locked");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn terminal_state_has_no_exits() {
        assert!(Door::Welded.is_terminal());
        assert!(!Door::Locked.is_terminal());
    }
}
