//! Algebraic structure traits.
//!
//! The elimination engine is generic over these traits and is instantiated
//! once per numeric representation.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::ParseError;
use crate::mode::NumericMode;
use crate::value::Value;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Equality is only `PartialEq` so that IEEE floats can take part.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
///
/// Division by zero is a caller bug; implementations may panic.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::one() / self.clone())
        }
    }
}

/// A ring with a compatible ordering.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// A field the solver can read from text and print back.
///
/// `Display` is the canonical format: parsing the display of any value and
/// displaying it again yields the same text.
pub trait Scalar: Field + OrderedRing + Display + Send + Sync + 'static {
    /// The numeric mode this representation implements.
    const MODE: NumericMode;

    /// Parses a trimmed token in this representation's grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the token if it does not match.
    fn parse(text: &str) -> Result<Self, ParseError>;

    /// Wraps this scalar into the tagged [`Value`].
    fn into_value(self) -> Value;
}
