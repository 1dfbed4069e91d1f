//! Pairwise comparison matrix and the builder operations that produce new ones.

use serde::{Deserialize, Serialize};

use super::{AhpError, Judgment};

/// Square, reciprocal matrix of pairwise judgments.
///
/// Entry (i, j) says how much more important item i is than item j.
/// Well-formed matrices keep a diagonal of 1 and (j, i) = 1 / (i, j).
/// Only the builder operations below produce new matrices; nothing mutates
/// one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Creates an empty 0x0 matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an n x n matrix where every pair is judged equal.
    pub fn equal(n: usize) -> Self {
        Self {
            rows: vec![vec![1.0; n]; n],
        }
    }

    /// Wraps raw rows without checking shape or reciprocity.
    ///
    /// Shape is checked by the priority engine against the declared size.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Builds the perfectly consistent matrix `v[i] / v[j]`.
    pub fn from_priorities(priorities: &[f64]) -> Self {
        let rows = priorities
            .iter()
            .map(|vi| priorities.iter().map(|vj| vi / vj).collect())
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns entry (row, column).
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns the raw rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns true if the matrix is `n x n` exactly.
    pub fn is_square_of(&self, n: usize) -> bool {
        self.rows.len() == n && self.rows.iter().all(|row| row.len() == n)
    }

    /// Checks the diagonal, positivity and reciprocal invariants.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        let n = self.size();
        if !self.is_square_of(n) {
            return false;
        }

        (0..n).all(|i| {
            (self.rows[i][i] - 1.0).abs() <= tolerance
                && (0..n).all(|j| {
                    let a = self.rows[i][j];
                    a > 0.0 && (a * self.rows[j][i] - 1.0).abs() <= tolerance
                })
        })
    }
}

/// Operations that derive a new comparison matrix from an existing one.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Resizes to `n x n`, carrying over the overlapping top-left block.
    ///
    /// New rows and columns default to 1 ("equally important"). Shrinking
    /// drops the trailing items. The copied block is itself reciprocal, so
    /// the result stays reciprocal.
    pub fn resize(previous: &ComparisonMatrix, n: usize) -> ComparisonMatrix {
        let mut next = ComparisonMatrix::equal(n);
        let overlap = previous.size().min(n);

        for (i, row) in next.rows.iter_mut().enumerate().take(overlap) {
            for (j, cell) in row.iter_mut().enumerate().take(overlap) {
                if let Some(value) = previous.get(i, j) {
                    *cell = value;
                }
            }
        }

        next
    }

    /// Removes the row and column at `index`.
    ///
    /// Used when an item in the middle of a set is deleted. Out of range
    /// indexes return an unchanged copy.
    pub fn remove_item(previous: &ComparisonMatrix, index: usize) -> ComparisonMatrix {
        let rows = previous
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != index)
                    .map(|(_, value)| *value)
                    .collect()
            })
            .collect();

        ComparisonMatrix { rows }
    }

    /// Sets entry (i, j) and its reciprocal (j, i).
    ///
    /// Only the upper triangle (`i < j`) is independently settable.
    ///
    /// # Errors
    /// - `InvalidComparison` if `i >= j` or `j` is outside the matrix.
    pub fn set_comparison(
        previous: &ComparisonMatrix,
        i: usize,
        j: usize,
        judgment: impl Into<Judgment>,
    ) -> Result<ComparisonMatrix, AhpError> {
        if i >= j {
            return Err(AhpError::invalid_comparison(
                i,
                j,
                "only entries above the diagonal can be set",
            ));
        }
        let n = previous.size();
        if j >= n || !previous.is_square_of(n) {
            return Err(AhpError::invalid_comparison(
                i,
                j,
                format!("index outside the {}x{} matrix", n, n),
            ));
        }

        let value = judgment.into().ratio();
        let mut next = previous.clone();
        next.rows[i][j] = value;
        next.rows[j][i] = 1.0 / value;
        Ok(next)
    }
}
