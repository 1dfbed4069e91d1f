//! File adapters - decision documents on disk.

mod decision_file;
mod dto;

pub use decision_file::{DocumentFormat, FileDecisionSource};
pub use dto::{ComparisonDto, DecisionDocument};
