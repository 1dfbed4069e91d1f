//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, error types and traits that the AHP
//! computation builds on.

mod errors;
mod item_set;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use item_set::ItemSet;
pub use state_machine::StateMachine;
