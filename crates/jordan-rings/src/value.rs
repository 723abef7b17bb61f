//! Tagged scalars for the text boundary.
//!
//! The engine itself is generic; `Value` is what callers see when the
//! numeric mode is only known at runtime.

use std::fmt;

use crate::error::ParseError;
use crate::mode::NumericMode;
use crate::rationals::Q;
use crate::reals::F64;
use crate::traits::{OrderedRing, Ring, Scalar};

/// A scalar in one of the supported representations.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An exact rational.
    Rational(Q),
    /// A double precision float.
    Float(F64),
}

impl Value {
    /// Parses a token in the grammar of `mode`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the token if it does not match.
    pub fn parse(text: &str, mode: NumericMode) -> Result<Self, ParseError> {
        match mode {
            NumericMode::Rational => Q::parse(text).map(Value::Rational),
            NumericMode::Float => F64::parse(text).map(Value::Float),
        }
    }

    /// Returns the canonical text of this value.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Returns the representation this value belongs to.
    #[must_use]
    pub fn mode(&self) -> NumericMode {
        match self {
            Value::Rational(_) => NumericMode::Rational,
            Value::Float(_) => NumericMode::Float,
        }
    }

    /// Returns true if this value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Rational(q) => q.is_zero(),
            Value::Float(x) => x.is_zero(),
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Value::Rational(q) => Value::Rational(q.abs()),
            Value::Float(x) => Value::Float(x.abs()),
        }
    }

    /// Returns the float, if this is one.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(x.value()),
            Value::Rational(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Rational(q) => write!(f, "{q}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<Q> for Value {
    fn from(value: Q) -> Self {
        value.into_value()
    }
}

impl From<F64> for Value {
    fn from(value: F64) -> Self {
        value.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_mode() {
        assert_eq!(
            Value::parse("3/4", NumericMode::Rational).unwrap(),
            Value::Rational(Q::new(3, 4))
        );
        assert_eq!(
            Value::parse("0.75", NumericMode::Float).unwrap(),
            Value::Float(F64(0.75))
        );
        assert!(Value::parse("0.75", NumericMode::Rational).is_err());
        assert!(Value::parse("3/4", NumericMode::Float).is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(Value::Rational(Q::new(10, 5)).format(), "2");
        assert_eq!(Value::Rational(Q::new(-1, 3)).format(), "-1/3");
        assert_eq!(Value::Float(F64(1.5)).format(), "1.5");
    }

    #[test]
    fn test_mode_and_accessors() {
        let v = Value::Rational(Q::new(-2, 1));
        assert_eq!(v.mode(), NumericMode::Rational);
        assert_eq!(v.abs(), Value::Rational(Q::new(2, 1)));
        assert!(v.as_float().is_none());
        assert!(Value::Float(F64(0.0)).is_zero());
    }
}
