//! Priority Engine - weight vector, λmax and consistency ratio for one matrix.

use serde::{Deserialize, Serialize};

use super::{random_index, AhpError, ComparisonMatrix};

/// Output of the priority engine for a matrix of size n.
///
/// `None` means "not computable", which is distinct from a ratio of 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    /// Weight per item, summing to 1.
    pub weights: Vec<f64>,
    /// Principal eigenvalue estimate.
    pub lambda_max: Option<f64>,
    /// (λmax − n) / (n − 1).
    pub consistency_index: Option<f64>,
    /// CI / RI[n]; 0 when RI[n] is 0.
    pub consistency_ratio: Option<f64>,
}

impl PriorityResult {
    /// Result for an empty item set.
    pub fn empty() -> Self {
        Self {
            weights: Vec::new(),
            lambda_max: None,
            consistency_index: None,
            consistency_ratio: None,
        }
    }

    /// Result reported for a malformed matrix: every weight is NaN.
    pub fn invalid(n: usize) -> Self {
        Self {
            weights: vec![f64::NAN; n],
            ..Self::empty()
        }
    }

    /// A single item carries all the weight and is trivially consistent.
    pub fn single() -> Self {
        Self {
            weights: vec![1.0],
            lambda_max: Some(1.0),
            consistency_index: Some(0.0),
            consistency_ratio: Some(0.0),
        }
    }

    /// Number of weighted items.
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// True when weights and ratio are usable downstream.
    pub fn is_computable(&self) -> bool {
        self.consistency_ratio.is_some() && self.weights.iter().all(|w| w.is_finite())
    }
}

/// Normalized-column-sum approximation of the principal eigenvector.
pub struct PriorityEngine;

impl PriorityEngine {
    /// Computes priorities, reporting a malformed matrix by value.
    ///
    /// A shape mismatch yields `PriorityResult::invalid(n)` instead of an
    /// error so one bad matrix does not disturb unrelated computations.
    pub fn compute(matrix: &ComparisonMatrix, n: usize) -> PriorityResult {
        Self::try_compute(matrix, n).unwrap_or_else(|_| PriorityResult::invalid(n))
    }

    /// Computes priorities for a matrix declared to be `n x n`.
    ///
    /// # Algorithm
    /// 1. Column sums; a zero column normalizes to 1/n per entry
    /// 2. Divide each entry by its column sum
    /// 3. Weight i = mean of normalized row i
    /// 4. λmax = (Σ (A·w)[i] / w[i] over w[i] ≠ 0) / n
    /// 5. CI = (λmax − n) / (n − 1), CR = CI / RI[n]
    ///
    /// # Edge Cases
    /// - n = 0: empty weights, no λmax or CR
    /// - n = 1: weights [1], λmax 1, CR 0
    /// - RI[n] = 0 (n ≤ 2): CR is 0
    ///
    /// # Errors
    /// - `InvalidMatrix` if the matrix is not exactly `n x n`
    pub fn try_compute(matrix: &ComparisonMatrix, n: usize) -> Result<PriorityResult, AhpError> {
        if n == 0 {
            return Ok(PriorityResult::empty());
        }

        Self::validate_shape(matrix, n)?;

        if n == 1 {
            return Ok(PriorityResult::single());
        }

        let rows = matrix.rows();
        let normalized = Self::normalize_columns(rows, n);
        let weights: Vec<f64> = normalized
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        let lambda_max = Self::lambda_max(rows, &weights);
        let size = n as f64;
        let consistency_index = (lambda_max - size) / (size - 1.0);
        let consistency_ratio = match random_index(n) {
            Some(ri) if ri > 0.0 => consistency_index / ri,
            _ => 0.0,
        };

        Ok(PriorityResult {
            weights,
            lambda_max: Some(lambda_max),
            consistency_index: Some(consistency_index),
            consistency_ratio: Some(consistency_ratio),
        })
    }

    fn validate_shape(matrix: &ComparisonMatrix, n: usize) -> Result<(), AhpError> {
        let rows = matrix.rows();
        if rows.len() != n {
            return Err(AhpError::invalid_matrix(
                format!("size {}", n),
                format!("expected {} rows, found {}", n, rows.len()),
            ));
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(AhpError::invalid_matrix(
                format!("size {}", n),
                format!("row {} has {} entries, expected {}", i, row.len(), n),
            ));
        }

        Ok(())
    }

    fn normalize_columns(rows: &[Vec<f64>], n: usize) -> Vec<Vec<f64>> {
        let column_sums: Vec<f64> = (0..n)
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();
        let fallback = 1.0 / n as f64;

        rows.iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| if *sum == 0.0 { fallback } else { value / sum })
                    .collect()
            })
            .collect()
    }

    /// Zero-weight rows are skipped but the mean still divides by n.
    fn lambda_max(rows: &[Vec<f64>], weights: &[f64]) -> f64 {
        let total: f64 = rows
            .iter()
            .zip(weights)
            .filter(|(_, w)| **w != 0.0)
            .map(|(row, w)| {
                let weighted_sum: f64 = row.iter().zip(weights).map(|(a, wj)| a * wj).sum();
                weighted_sum / w
            })
            .sum();

        total / weights.len() as f64
    }
}
