//! DecisionModel - item sets together with the comparison matrices they own.

use std::collections::HashMap;

use super::{AhpError, ComparisonMatrix, Judgment, MatrixBuilder};
use crate::domain::foundation::{ItemSet, ValidationError};

/// Criteria, alternatives and their pairwise comparison matrices.
///
/// The criteria set owns one matrix; each criterion owns exactly one
/// alternatives matrix keyed by its name. Every update returns a new model
/// with matrices resized so previously entered judgments survive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionModel {
    criteria: ItemSet,
    alternatives: ItemSet,
    criteria_matrix: ComparisonMatrix,
    alternative_matrices: HashMap<String, ComparisonMatrix>,
}

impl DecisionModel {
    /// Creates a model with no criteria and no alternatives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from externally supplied parts without filling gaps.
    ///
    /// Criteria without an alternatives matrix surface later as
    /// `MissingComparisons`; shape problems surface as `InvalidMatrix`.
    pub fn assemble(
        criteria: ItemSet,
        alternatives: ItemSet,
        criteria_matrix: ComparisonMatrix,
        alternative_matrices: HashMap<String, ComparisonMatrix>,
    ) -> Self {
        Self {
            criteria,
            alternatives,
            criteria_matrix,
            alternative_matrices,
        }
    }

    pub fn criteria(&self) -> &ItemSet {
        &self.criteria
    }

    pub fn alternatives(&self) -> &ItemSet {
        &self.alternatives
    }

    pub fn criteria_matrix(&self) -> &ComparisonMatrix {
        &self.criteria_matrix
    }

    /// Returns the alternatives matrix owned by `criterion`, if recorded.
    pub fn alternatives_matrix(&self, criterion: &str) -> Option<&ComparisonMatrix> {
        self.alternative_matrices.get(criterion.trim())
    }

    /// Adds a criterion with a fresh alternatives matrix.
    pub fn with_criterion(&self, name: impl Into<String>) -> Result<Self, AhpError> {
        let criteria = self.criteria.with_item(name)?;
        let added = criteria.iter().last().unwrap_or_default().to_string();

        let mut next = self.clone();
        next.criteria_matrix = MatrixBuilder::resize(&self.criteria_matrix, criteria.len());
        next.alternative_matrices
            .insert(added, ComparisonMatrix::equal(self.alternatives.len()));
        next.criteria = criteria;
        Ok(next)
    }

    /// Removes a criterion and discards its alternatives matrix.
    pub fn without_criterion(&self, name: &str) -> Result<Self, AhpError> {
        let (criteria, index) = self.criteria.without_item(name)?;

        let mut next = self.clone();
        next.criteria_matrix = MatrixBuilder::remove_item(&self.criteria_matrix, index);
        next.alternative_matrices.remove(name.trim());
        next.criteria = criteria;
        Ok(next)
    }

    /// Adds an alternative, growing every per-criterion matrix.
    pub fn with_alternative(&self, name: impl Into<String>) -> Result<Self, AhpError> {
        let alternatives = self.alternatives.with_item(name)?;
        let size = alternatives.len();

        let mut next = self.clone();
        next.alternative_matrices = self
            .alternative_matrices
            .iter()
            .map(|(criterion, matrix)| (criterion.clone(), MatrixBuilder::resize(matrix, size)))
            .collect();
        next.alternatives = alternatives;
        Ok(next)
    }

    /// Removes an alternative's row and column from every per-criterion matrix.
    pub fn without_alternative(&self, name: &str) -> Result<Self, AhpError> {
        let (alternatives, index) = self.alternatives.without_item(name)?;

        let mut next = self.clone();
        next.alternative_matrices = self
            .alternative_matrices
            .iter()
            .map(|(criterion, matrix)| {
                (criterion.clone(), MatrixBuilder::remove_item(matrix, index))
            })
            .collect();
        next.alternatives = alternatives;
        Ok(next)
    }

    /// Records how much more important `first` is than `second`.
    pub fn compare_criteria(
        &self,
        first: &str,
        second: &str,
        judgment: impl Into<Judgment>,
    ) -> Result<Self, AhpError> {
        let matrix = Self::apply(&self.criteria, &self.criteria_matrix, first, second, judgment.into())?;

        let mut next = self.clone();
        next.criteria_matrix = matrix;
        Ok(next)
    }

    /// Records how much better `first` is than `second` under `criterion`.
    pub fn compare_alternatives(
        &self,
        criterion: &str,
        first: &str,
        second: &str,
        judgment: impl Into<Judgment>,
    ) -> Result<Self, AhpError> {
        let key = criterion.trim();
        if !self.criteria.contains(key) {
            return Err(ValidationError::unknown_item("criteria", key).into());
        }
        let current = self
            .alternative_matrices
            .get(key)
            .ok_or_else(|| AhpError::missing_comparisons(key))?;
        let matrix = Self::apply(&self.alternatives, current, first, second, judgment.into())?;

        let mut next = self.clone();
        next.alternative_matrices.insert(key.to_string(), matrix);
        Ok(next)
    }

    /// Resolves names to (row, column); a lower-triangle pair is stored
    /// from the other side with the judgment inverted.
    fn apply(
        items: &ItemSet,
        matrix: &ComparisonMatrix,
        first: &str,
        second: &str,
        judgment: Judgment,
    ) -> Result<ComparisonMatrix, AhpError> {
        let i = items
            .index_of(first)
            .ok_or_else(|| ValidationError::unknown_item("item set", first))?;
        let j = items
            .index_of(second)
            .ok_or_else(|| ValidationError::unknown_item("item set", second))?;

        if i > j {
            MatrixBuilder::set_comparison(matrix, j, i, judgment.inverted())
        } else {
            MatrixBuilder::set_comparison(matrix, i, j, judgment)
        }
    }
}
