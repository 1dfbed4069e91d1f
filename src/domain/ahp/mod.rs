//! AHP Module - Analytic Hierarchy Process computation.
//!
//! Pure, stateless services over immutable values. Every operation returns a
//! new matrix or result; nothing recomputes implicitly.
//!
//! # Components
//!
//! - `MatrixBuilder` - Resizes matrices and records Saaty-scale judgments
//! - `PriorityEngine` - Weights, λmax and consistency ratio per matrix
//! - `ConsistencyGate` - CR ≤ 0.10 acceptability check
//! - `Synthesizer` - Weighted-sum ranking across criteria
//! - `DecisionModel` - Item sets and the matrices they own

mod consistency_gate;
mod decision_model;
mod errors;
mod matrix;
mod pipeline_stage;
mod priority_engine;
mod random_index;
mod scale;
mod synthesizer;

pub use consistency_gate::{ConsistencyGate, ConsistencyVerdict, CONSISTENCY_RATIO_THRESHOLD};
pub use decision_model::DecisionModel;
pub use errors::{AhpError, ComparisonSet, ItemKind};
pub use matrix::{ComparisonMatrix, MatrixBuilder};
pub use pipeline_stage::PipelineStage;
pub use priority_engine::{PriorityEngine, PriorityResult};
pub use random_index::{random_index, RANDOM_INDEX};
pub use scale::{Intensity, Judgment};
pub use synthesizer::{RankedAlternative, Synthesizer};
