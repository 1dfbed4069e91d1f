//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (item sets, errors, state machine)
//! - `ahp` - Pairwise comparison matrices, priorities, consistency and synthesis

pub mod ahp;
pub mod foundation;
