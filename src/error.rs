//! Errors reported by permutation operations.
use thiserror::Error;

/// Contract violations detected by the fallible operations of [`Permutation`][crate::Permutation].
///
/// A failing operation never modifies an existing permutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermError {
    /// The values do not form a bijection on {1, ..., n} for n >= 1.
    #[error("Invalid permutation")]
    InvalidPermutation,
    /// Two permutations of different order were combined.
    #[error("Permutation count mismatch: {left} and {right}")]
    CountMismatch { left: usize, right: usize },
    /// A sequence's length differs from the order of the permutation applied to it.
    #[error("Wrong input data length: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
