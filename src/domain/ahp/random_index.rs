//! Saaty's Random Index table.

/// Average consistency index of random reciprocal matrices, indexed by `n - 1`.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Returns RI for a matrix of size `n`.
///
/// Sizes past the end of the table reuse the last entry; `n = 0` has no index.
pub fn random_index(n: usize) -> Option<f64> {
    match n {
        0 => None,
        n if n <= RANDOM_INDEX.len() => Some(RANDOM_INDEX[n - 1]),
        _ => RANDOM_INDEX.last().copied(),
    }
}
