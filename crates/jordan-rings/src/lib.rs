//! # jordan-rings
//!
//! Scalar fields for the Jordan elimination engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`, `Scalar`
//! - Concrete fields: exact rationals `Q` and double precision `F64`
//! - `NumericMode`, the runtime choice between the two
//! - `Value`, a tagged scalar used at the text boundary
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field
//!  └── OrderedRing
//!        └── Scalar (Field + OrderedRing + parsing + display)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod mode;
pub mod rationals;
pub mod reals;
pub mod traits;
pub mod value;

#[cfg(test)]
mod proptests;

pub use error::ParseError;
pub use mode::NumericMode;
pub use rationals::Q;
pub use reals::F64;
pub use traits::{Field, OrderedRing, Ring, Scalar};
pub use value::Value;
