//! Text in, trace out.
//!
//! This is the boundary between whatever collects the entries and the
//! engine: tokens are parsed and the shape is checked here, so the engine
//! only ever sees a well-formed `AugmentedMatrix`.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use jordan_linalg::{
    eliminate_with, AugmentedMatrix, Elimination, InvariantViolation, Outcome, Step,
};
use jordan_rings::{NumericMode, Scalar, Value, F64, Q};

use crate::config::{SolverConfig, MIN_DIMENSION};
use crate::error::SolveError;

/// A finished solve in a concrete scalar type.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<R> {
    /// The system as parsed, before elimination.
    pub input: AugmentedMatrix<R>,
    /// The step log and classification.
    pub elimination: Elimination<R>,
}

impl<R: Scalar> Solution<R> {
    /// `A·x − b` for the reported unique solution, against the parsed input.
    ///
    /// `None` unless the outcome is unique.
    #[must_use]
    pub fn residual(&self) -> Option<Vec<R>> {
        let x = self.elimination.outcome.solution()?;
        self.input.residual(x).ok()
    }

    /// Erases the scalar type.
    #[must_use]
    pub fn into_report(self) -> Report {
        Report {
            mode: R::MODE,
            input: self.input.map(R::into_value),
            steps: self
                .elimination
                .steps
                .into_iter()
                .map(|s| s.map(R::into_value))
                .collect(),
            outcome: self.elimination.outcome.map(R::into_value),
        }
    }
}

/// A finished solve with runtime-tagged scalars, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Mode the system was solved in.
    pub mode: NumericMode,
    /// The system as parsed, before elimination.
    pub input: AugmentedMatrix<Value>,
    /// Every recorded step, in order.
    pub steps: Vec<Step<Value>>,
    /// The classification.
    pub outcome: Outcome<Value>,
}

impl Report {
    /// `xₖ = value` lines for a unique solution.
    #[must_use]
    pub fn solution_lines(&self) -> Vec<String> {
        self.outcome.solution_lines()
    }

    /// Short verdict text.
    #[must_use]
    pub fn verdict(&self) -> String {
        self.outcome.describe()
    }
}

/// Parses `rows` into an augmented system of `R`.
///
/// The dimension is the number of rows; it must lie between
/// [`MIN_DIMENSION`] and the configured maximum, and every row must hold
/// exactly `n + 1` tokens. Shape is checked before any token is parsed.
///
/// # Errors
///
/// Returns [`SolveError::Invariant`] for a bad shape and
/// [`SolveError::Parse`] for the first token (row-major) that does not parse.
pub fn parse_system<R, S>(
    rows: &[Vec<S>],
    config: &SolverConfig,
) -> Result<AugmentedMatrix<R>, SolveError>
where
    R: Scalar,
    S: AsRef<str>,
{
    let n = rows.len();
    if n < MIN_DIMENSION || n > config.max_dimension {
        return Err(InvariantViolation::DimensionOutOfRange {
            n,
            min: MIN_DIMENSION,
            max: config.max_dimension,
        }
        .into());
    }
    if let Some((row, tokens)) = rows.iter().enumerate().find(|(_, r)| r.len() != n + 1) {
        return Err(InvariantViolation::RaggedRow {
            row,
            expected: n + 1,
            found: tokens.len(),
        }
        .into());
    }

    let parsed = rows
        .iter()
        .enumerate()
        .map(|(i, tokens)| {
            tokens
                .iter()
                .enumerate()
                .map(|(j, token)| {
                    R::parse(token.as_ref()).map_err(|source| {
                        warn!(row = i + 1, col = j + 1, token = source.token(), "rejected entry");
                        SolveError::Parse {
                            row: i + 1,
                            col: j + 1,
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<R>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AugmentedMatrix::try_from_rows(parsed)?)
}

/// Parses and solves in a concrete scalar type.
///
/// # Errors
///
/// See [`parse_system`]; the elimination itself cannot fail.
pub fn solve_as<R, S>(rows: &[Vec<S>], config: &SolverConfig) -> Result<Solution<R>, SolveError>
where
    R: Scalar,
    S: AsRef<str>,
{
    let input: AugmentedMatrix<R> = parse_system(rows, config)?;
    let mut working = input.clone();
    let elimination = eliminate_with(&mut working, &config.elimination_options());

    info!(
        n = input.dimension(),
        mode = %R::MODE,
        steps = elimination.steps.len(),
        outcome = %elimination.outcome.describe(),
        "solved"
    );
    Ok(Solution { input, elimination })
}

/// Parses and solves in the mode chosen by `config`.
///
/// # Errors
///
/// See [`parse_system`]; the elimination itself cannot fail.
pub fn solve<S: AsRef<str>>(rows: &[Vec<S>], config: &SolverConfig) -> Result<Report, SolveError> {
    debug!(mode = %config.mode, rows = rows.len(), "solve request");
    match config.mode {
        NumericMode::Rational => solve_as::<Q, S>(rows, config).map(Solution::into_report),
        NumericMode::Float => solve_as::<F64, S>(rows, config).map(Solution::into_report),
    }
}

/// Solves independent systems in parallel.
///
/// Each system is parsed into its own matrix; results keep input order.
#[must_use]
pub fn solve_batch<S>(
    systems: &[Vec<Vec<S>>],
    config: &SolverConfig,
) -> Vec<Result<Report, SolveError>>
where
    S: AsRef<str> + Sync,
{
    systems
        .par_iter()
        .map(|rows| solve(rows, config))
        .collect()
}
