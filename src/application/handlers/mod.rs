//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod consistency_report;
mod rank_alternatives;

pub use consistency_report::{ConsistencyEntry, ConsistencyReport, ConsistencyReportHandler};
pub use rank_alternatives::{
    CriterionPriorities, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
