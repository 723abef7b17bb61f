//! # Jordan
//!
//! Solves square linear systems `A·x = b` by Gauss-Jordan elimination
//! with partial pivoting, and keeps every intermediate matrix.
//!
//! Entries arrive as text and are read either as exact rationals or as
//! `f64`. The result is a [`Report`]: the parsed input, one labelled
//! snapshot per row operation, and a classification.
//!
//! ## Quick Start
//!
//! ```rust
//! use jordan::prelude::*;
//!
//! let rows = vec![vec!["2", "1", "5"], vec!["1", "3", "10"]];
//! let report = solve(&rows, &SolverConfig::default()).unwrap();
//!
//! assert_eq!(report.solution_lines(), vec!["x₀ = 1", "x₁ = 3"]);
//! for step in &report.steps {
//!     println!("{}: {}", step.description(), step.snapshot());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod solve;

pub use jordan_integers as integers;
pub use jordan_linalg as linalg;
pub use jordan_rings as rings;

pub use config::{SolverConfig, MIN_DIMENSION};
pub use error::SolveError;
pub use solve::{parse_system, solve, solve_as, solve_batch, Report, Solution};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{solve, solve_as, solve_batch, Report, SolveError, SolverConfig};
    pub use jordan_integers::{Integer, Rational};
    pub use jordan_linalg::{
        AugmentedMatrix, ClassificationPolicy, NoSolutionReason, Outcome, Step, StepKind,
    };
    pub use jordan_rings::{NumericMode, Scalar, Value, F64, Q};
}

#[cfg(test)]
mod proptests;
