//! Synthesizer - weighted-sum combination of criteria and alternative weights.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{AhpError, ComparisonSet, ItemKind};
use crate::domain::foundation::ItemSet;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub score: f64,
}

/// Combines accepted weight vectors into a ranked score per alternative.
pub struct Synthesizer;

impl Synthesizer {
    /// Computes and ranks the overall score of every alternative.
    ///
    /// # Algorithm
    /// score(a_k) = Σ_c alternative_weights[c][k] × criteria_weights[c]
    ///
    /// Sorted by score descending; equal scores keep alternative order.
    ///
    /// # Errors
    /// - `EmptyInput` if there are no criteria or no alternatives
    /// - `InvalidMatrix` if `criteria_weights` does not match the criteria count
    /// - `MissingComparisons` if a criterion has no weight vector, or one of
    ///   the wrong length
    pub fn synthesize(
        criteria_weights: &[f64],
        alternative_weights: &HashMap<String, Vec<f64>>,
        alternatives: &ItemSet,
        criteria: &ItemSet,
    ) -> Result<Vec<RankedAlternative>, AhpError> {
        if criteria.is_empty() {
            return Err(AhpError::EmptyInput(ItemKind::Criteria));
        }
        if alternatives.is_empty() {
            return Err(AhpError::EmptyInput(ItemKind::Alternatives));
        }
        if criteria_weights.len() != criteria.len() {
            return Err(AhpError::invalid_matrix(
                ComparisonSet::Criteria,
                format!(
                    "{} weights for {} criteria",
                    criteria_weights.len(),
                    criteria.len()
                ),
            ));
        }

        let mut scores = vec![0.0; alternatives.len()];
        for (criterion, criterion_weight) in criteria.iter().zip(criteria_weights) {
            let weights = alternative_weights
                .get(criterion)
                .filter(|w| w.len() == alternatives.len())
                .ok_or_else(|| AhpError::missing_comparisons(criterion))?;

            for (score, weight) in scores.iter_mut().zip(weights) {
                *score += weight * criterion_weight;
            }
        }

        Ok(Self::rank(alternatives, scores))
    }

    fn rank(alternatives: &ItemSet, scores: Vec<f64>) -> Vec<RankedAlternative> {
        let mut scored: Vec<(&str, f64)> = alternatives.iter().zip(scores).collect();
        // Vec::sort_by is stable, so ties keep alternative order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .enumerate()
            .map(|(i, (name, score))| RankedAlternative {
                rank: i + 1,
                name: name.to_string(),
                score,
            })
            .collect()
    }
}
