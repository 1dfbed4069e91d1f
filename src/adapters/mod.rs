//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `file` - Decision documents in JSON or YAML
//! - `memory` - In-memory decision source
//! - `report` - Plain-text rendering of results

pub mod file;
pub mod memory;
pub mod report;

pub use file::{DecisionDocument, DocumentFormat, FileDecisionSource};
pub use memory::InMemoryDecisionSource;
