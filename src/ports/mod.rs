//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionSource` - Loads a decision model (criteria, alternatives, judgments)

mod decision_source;

pub use decision_source::{DecisionSource, SourceError};
