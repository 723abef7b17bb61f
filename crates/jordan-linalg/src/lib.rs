//! # jordan-linalg
//!
//! Dense augmented systems and step-recording Gauss-Jordan elimination.
//!
//! This crate provides:
//! - `DenseMatrix`, a small row-major matrix with in-place row operations
//! - `AugmentedMatrix`, an n × (n+1) system `[A|b]` checked at construction
//! - `eliminate`, which reduces a system column by column with partial
//!   pivoting and returns an `Outcome` plus every intermediate `Step`
//!
//! The engine is generic over `jordan_rings::Scalar` and is instantiated
//! once per numeric representation. It performs no I/O and holds no state
//! between calls; each call borrows one matrix exclusively.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod augmented;
pub mod dense_matrix;
pub mod elimination;
pub mod error;
pub mod outcome;
pub mod step;

pub use augmented::AugmentedMatrix;
pub use dense_matrix::DenseMatrix;
pub use elimination::{
    eliminate, eliminate_with, ClassificationPolicy, Elimination, EliminationOptions,
};
pub use error::InvariantViolation;
pub use outcome::{NoSolutionReason, Outcome};
pub use step::{Step, StepKind};

#[cfg(test)]
mod proptests;
