//! Shape invariants guarded at matrix construction.

use thiserror::Error;

/// A matrix could not be built with the shape the engine requires.
///
/// These are construction-time guards; once an `AugmentedMatrix` exists the
/// engine cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A row has a different length than the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The matrix is not n × (n+1).
    #[error("a {rows}×{cols} matrix is not an augmented system (needs n×(n+1))")]
    NotAugmented {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },

    /// The system dimension lies outside the accepted range.
    #[error("dimension {n} is outside the accepted range {min}..={max}")]
    DimensionOutOfRange {
        /// Requested dimension.
        n: usize,
        /// Smallest accepted dimension.
        min: usize,
        /// Largest accepted dimension.
        max: usize,
    },

    /// A solution vector does not match the number of unknowns.
    #[error("expected {expected} unknowns, got {found}")]
    SolutionLength {
        /// Number of unknowns of the system.
        expected: usize,
        /// Length of the supplied vector.
        found: usize,
    },
}
