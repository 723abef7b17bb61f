//! # jordan-integers
//!
//! Arbitrary precision integer and rational arithmetic for the Jordan solver.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Parsing of the literal grammar accepted at the input boundary:
//!   `[+-]?digits` and `[+-]?digits/[+-]?digits`
//!
//! No operation in this crate goes through floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::{Integer, IntegerLiteralError};
pub use rational::{Rational, RationalLiteralError};
