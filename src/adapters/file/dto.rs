//! Serialized form of a decision, shared by the JSON and YAML readers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ahp::{AhpError, DecisionModel, Judgment};
use crate::domain::foundation::{ItemSet, ValidationError};

/// One recorded judgment: how much `first` is preferred over `second`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDto {
    pub first: String,
    pub second: String,
    /// Saaty ratio, e.g. `3` or `0.5`.
    pub value: Judgment,
}

/// A complete decision as written in a file.
///
/// ```yaml
/// criteria: [Cost, Quality]
/// alternatives: [A, B]
/// criteria_comparisons:
///   - { first: Cost, second: Quality, value: 3 }
/// alternative_comparisons:
///   Cost:
///     - { first: A, second: B, value: 2 }
///   Quality:
///     - { first: A, second: B, value: 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDocument {
    pub criteria: ItemSet,
    pub alternatives: ItemSet,
    #[serde(default)]
    pub criteria_comparisons: Vec<ComparisonDto>,
    #[serde(default)]
    pub alternative_comparisons: HashMap<String, Vec<ComparisonDto>>,
}

impl DecisionDocument {
    /// Converts the document into a model.
    ///
    /// A criterion absent from `alternative_comparisons` gets no alternatives
    /// matrix, unless there are fewer than two alternatives and nothing could
    /// have been compared.
    pub fn into_model(self) -> Result<DecisionModel, AhpError> {
        let mut by_criterion: HashMap<String, Vec<ComparisonDto>> = HashMap::new();
        for (key, comparisons) in self.alternative_comparisons {
            by_criterion
                .entry(key.trim().to_string())
                .or_default()
                .extend(comparisons);
        }

        if let Some(unknown) = by_criterion.keys().find(|k| !self.criteria.contains(k)) {
            return Err(ValidationError::unknown_item("criteria", unknown.as_str()).into());
        }

        let mut model = DecisionModel::new();
        for name in self.criteria.iter() {
            model = model.with_criterion(name)?;
        }
        for name in self.alternatives.iter() {
            model = model.with_alternative(name)?;
        }

        for c in &self.criteria_comparisons {
            model = model.compare_criteria(&c.first, &c.second, c.value)?;
        }
        for (criterion, comparisons) in &by_criterion {
            for c in comparisons {
                model = model.compare_alternatives(criterion, &c.first, &c.second, c.value)?;
            }
        }

        let nothing_to_compare = self.alternatives.len() < 2;
        let recorded = self
            .criteria
            .iter()
            .filter(|c| nothing_to_compare || by_criterion.contains_key(*c))
            .filter_map(|c| {
                model
                    .alternatives_matrix(c)
                    .map(|m| (c.to_string(), m.clone()))
            })
            .collect();

        Ok(DecisionModel::assemble(
            self.criteria,
            self.alternatives,
            model.criteria_matrix().clone(),
            recorded,
        ))
    }
}
