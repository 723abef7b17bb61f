//! Gauss-Jordan elimination with partial pivoting and a step log.
//!
//! For each column `i` the engine
//!
//! 1. moves the row with the largest `|a[r][i]|` (r ≥ i, first on ties) to
//!    position `i`,
//! 2. skips the column if the pivot is zero, or stops with
//!    [`NoSolutionReason::ContradictoryEquation`] if row `i` reads `0 = c`,
//! 3. divides row `i` by the pivot,
//! 4. clears column `i` from every other row.
//!
//! Every mutation is recorded as a [`Step`] holding a copy of the matrix.
//! A zero pivot never triggers a search for a substitute row; columns
//! skipped this way are only detected by [`ClassificationPolicy::RankAware`].

use tracing::{debug, instrument, trace};

use jordan_rings::traits::Scalar;

use crate::augmented::AugmentedMatrix;
use crate::outcome::{NoSolutionReason, Outcome};
use crate::step::{Step, StepKind};

/// How the final matrix is classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassificationPolicy {
    /// Report the constant column as the unique solution unless some row
    /// reads `0 = c` with `c ≠ 0`. Redundant `0 = 0` rows are ignored, so
    /// rank deficient systems are still reported as `Unique`.
    #[default]
    Literal,
    /// Compare the ranks of `A` and `[A|b]` and report
    /// [`Outcome::InfiniteSolutions`] for consistent rank deficient systems.
    RankAware,
}

/// Knobs for a single elimination run.
#[derive(Clone, Debug)]
pub struct EliminationOptions {
    /// Record the untouched input as the first step.
    pub record_initial: bool,
    /// Final classification rule.
    pub policy: ClassificationPolicy,
}

impl Default for EliminationOptions {
    fn default() -> Self {
        Self {
            record_initial: true,
            policy: ClassificationPolicy::Literal,
        }
    }
}

/// Outcome and step log of one elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination<R> {
    /// The classification.
    pub outcome: Outcome<R>,
    /// Every recorded step, in order.
    pub steps: Vec<Step<R>>,
}

impl<R> Elimination<R> {
    /// Converts every scalar in the outcome and the snapshots.
    #[must_use]
    pub fn map<S>(self, mut f: impl FnMut(R) -> S) -> Elimination<S> {
        Elimination {
            steps: self.steps.into_iter().map(|s| s.map(&mut f)).collect(),
            outcome: self.outcome.map(f),
        }
    }
}

/// Runs elimination with default options.
///
/// The matrix is reduced in place; clone it first to keep the input.
pub fn eliminate<R: Scalar>(matrix: &mut AugmentedMatrix<R>) -> Elimination<R> {
    eliminate_with(matrix, &EliminationOptions::default())
}

/// Runs elimination with explicit options.
///
/// The matrix is reduced in place; clone it first to keep the input.
#[instrument(level = "debug", skip_all, fields(n = matrix.dimension(), mode = %R::MODE))]
pub fn eliminate_with<R: Scalar>(
    matrix: &mut AugmentedMatrix<R>,
    options: &EliminationOptions,
) -> Elimination<R> {
    let mut log = StepLog::default();
    if options.record_initial {
        log.record(StepKind::Initial, matrix);
    }

    let n = matrix.dimension();
    for i in 0..n {
        let best = select_pivot(matrix, i);
        if best != i {
            matrix.as_dense_mut().swap_rows(i, best);
            log.record(StepKind::Swap { first: i, second: best }, matrix);
        }

        let pivot = matrix.coefficient(i, i).clone();
        if pivot.is_zero() {
            if matrix.is_contradiction(i) {
                let reason = NoSolutionReason::ContradictoryEquation { row: i };
                debug!(column = i, %reason, "stopping early");
                return log.finish(Outcome::NoSolution(reason));
            }
            debug!(column = i, "zero pivot, column skipped");
            continue;
        }

        matrix.as_dense_mut().div_row(i, &pivot);
        log.record(StepKind::Normalize { row: i, pivot }, matrix);

        for j in (0..n).filter(|&j| j != i) {
            let factor = matrix.coefficient(j, i).clone();
            if factor.is_zero() {
                continue;
            }
            matrix.as_dense_mut().sub_scaled_row(j, i, &factor);
            log.record(
                StepKind::Eliminate {
                    target: j,
                    source: i,
                    factor,
                },
                matrix,
            );
        }
    }

    let outcome = classify(matrix, options.policy);
    debug!(steps = log.steps.len(), outcome = %outcome.describe(), "elimination finished");
    log.finish(outcome)
}

/// Index of the row in `col..n` with the largest `|a[row][col]|`.
fn select_pivot<R: Scalar>(matrix: &AugmentedMatrix<R>, col: usize) -> usize {
    let mut best = col;
    let mut best_abs = matrix.coefficient(col, col).abs();
    for row in col + 1..matrix.dimension() {
        let candidate = matrix.coefficient(row, col).abs();
        if candidate > best_abs {
            best = row;
            best_abs = candidate;
        }
    }
    best
}

fn classify<R: Scalar>(matrix: &AugmentedMatrix<R>, policy: ClassificationPolicy) -> Outcome<R> {
    let n = matrix.dimension();
    if let Some(row) = (0..n).find(|&row| matrix.is_contradiction(row)) {
        return Outcome::NoSolution(NoSolutionReason::ContradictoryEquation { row });
    }

    match policy {
        ClassificationPolicy::Literal => Outcome::Unique(matrix.constants()),
        ClassificationPolicy::RankAware => classify_by_rank(matrix),
    }
}

/// Rank test on the fully reduced form of the (already eliminated) matrix.
fn classify_by_rank<R: Scalar>(matrix: &AugmentedMatrix<R>) -> Outcome<R> {
    let n = matrix.dimension();
    let (rref, pivot_cols) = matrix.as_dense().rref();

    if pivot_cols.last() == Some(&n) {
        return Outcome::NoSolution(NoSolutionReason::Inconsistent);
    }
    if pivot_cols.len() == n {
        return Outcome::Unique(matrix.constants());
    }

    let mut particular = vec![R::zero(); n];
    for (row, &col) in pivot_cols.iter().enumerate() {
        particular[col] = rref[(row, n)].clone();
    }
    let free_columns = (0..n).filter(|c| !pivot_cols.contains(c)).collect();
    trace!(rank = pivot_cols.len(), "rank deficient system");

    Outcome::InfiniteSolutions {
        particular,
        free_columns,
    }
}

/// Accumulates steps and mirrors each one to the log.
struct StepLog<R> {
    steps: Vec<Step<R>>,
}

impl<R> Default for StepLog<R> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<R: Scalar> StepLog<R> {
    fn record(&mut self, kind: StepKind<R>, matrix: &AugmentedMatrix<R>) {
        let step = Step::record(kind, matrix);
        debug!(index = self.steps.len(), label = step.description(), "step");
        trace!(matrix = %step.snapshot(), "snapshot");
        self.steps.push(step);
    }

    fn finish(self, outcome: Outcome<R>) -> Elimination<R> {
        Elimination {
            outcome,
            steps: self.steps,
        }
    }
}
