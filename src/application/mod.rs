//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Ranking is a command that
//! fails fast; the consistency report is a query that evaluates every set.

pub mod handlers;

pub use handlers::{
    ConsistencyEntry, ConsistencyReport, ConsistencyReportHandler, CriterionPriorities,
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
