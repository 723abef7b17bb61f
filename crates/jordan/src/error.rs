//! Errors surfaced before the engine runs.

use thiserror::Error;

use jordan_linalg::InvariantViolation;
use jordan_rings::ParseError;

/// Why a solve request was refused.
///
/// A system without solutions is not an error; it is reported as
/// `Outcome::NoSolution`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An entry could not be read in the active numeric mode.
    #[error("invalid entry at row {row}, column {col}")]
    Parse {
        /// One-based row of the entry.
        row: usize,
        /// One-based column of the entry.
        col: usize,
        /// The parse failure, naming the token.
        #[source]
        source: ParseError,
    },

    /// The input does not have the shape of an accepted augmented system.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl SolveError {
    /// The offending token for parse failures.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            SolveError::Parse { source, .. } => Some(source.token()),
            SolveError::Invariant(_) => None,
        }
    }
}
