//! Recorded elimination steps.

use std::fmt;

use crate::augmented::AugmentedMatrix;

/// The row operation a [`Step`] performed.
///
/// Row indices are zero-based; labels print them one-based.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind<R> {
    /// The untouched input.
    Initial,
    /// Two rows exchanged for partial pivoting.
    Swap {
        /// The row being pivoted on.
        first: usize,
        /// The row holding the largest candidate.
        second: usize,
    },
    /// A row divided by its pivot.
    Normalize {
        /// The pivot row.
        row: usize,
        /// The divisor.
        pivot: R,
    },
    /// `target ← target − factor × source`.
    Eliminate {
        /// The row being cleared.
        target: usize,
        /// The pivot row.
        source: usize,
        /// The multiple of `source` subtracted.
        factor: R,
    },
}

impl<R> StepKind<R> {
    /// Applies `f` to the scalar payload.
    #[must_use]
    pub fn map<S>(self, mut f: impl FnMut(R) -> S) -> StepKind<S> {
        match self {
            StepKind::Initial => StepKind::Initial,
            StepKind::Swap { first, second } => StepKind::Swap { first, second },
            StepKind::Normalize { row, pivot } => StepKind::Normalize {
                row,
                pivot: f(pivot),
            },
            StepKind::Eliminate {
                target,
                source,
                factor,
            } => StepKind::Eliminate {
                target,
                source,
                factor: f(factor),
            },
        }
    }
}

impl<R: fmt::Display> fmt::Display for StepKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Initial => f.write_str("initial matrix"),
            StepKind::Swap { first, second } => {
                write!(f, "swap row {} and row {}", first + 1, second + 1)
            }
            StepKind::Normalize { row, pivot } => write!(f, "row {} ÷ ({pivot})", row + 1),
            StepKind::Eliminate {
                target,
                source,
                factor,
            } => write!(f, "row {} − ({factor}) × row {}", target + 1, source + 1),
        }
    }
}

/// One recorded transformation: what happened, and the matrix right after.
///
/// The snapshot is an owned copy; mutating the live matrix later never
/// changes a recorded step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<R> {
    kind: StepKind<R>,
    description: String,
    snapshot: AugmentedMatrix<R>,
}

impl<R: Clone + fmt::Display> Step<R> {
    pub(crate) fn record(kind: StepKind<R>, matrix: &AugmentedMatrix<R>) -> Self {
        Self {
            description: kind.to_string(),
            kind,
            snapshot: matrix.clone(),
        }
    }
}

impl<R> Step<R> {
    /// The structured operation.
    #[must_use]
    pub fn kind(&self) -> &StepKind<R> {
        &self.kind
    }

    /// Human-readable label, e.g. `row 2 ÷ (3/4)`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The matrix immediately after this step.
    #[must_use]
    pub fn snapshot(&self) -> &AugmentedMatrix<R> {
        &self.snapshot
    }

    /// Converts the scalars of this step, keeping its label.
    #[must_use]
    pub fn map<S>(self, mut f: impl FnMut(R) -> S) -> Step<S> {
        Step {
            kind: self.kind.map(&mut f),
            description: self.description,
            snapshot: self.snapshot.map(f),
        }
    }
}
