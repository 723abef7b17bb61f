//! Double precision reals.
//!
//! `F64` is an approximation of a field: the ring laws only hold up to
//! rounding. Zero tests are exact comparisons against `0.0`, so tiny
//! residues left by cancellation are treated as nonzero.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::ParseError;
use crate::mode::NumericMode;
use crate::traits::{Field, OrderedRing, Ring, Scalar};
use crate::value::Value;

/// An IEEE 754 double used as a field element.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct F64(pub f64);

impl F64 {
    /// Returns the wrapped float.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the two values differ by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl Ring for F64 {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }
}

impl Field for F64 {}

impl OrderedRing for F64 {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        if self.0 > 0.0 {
            1
        } else if self.0 < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl Scalar for F64 {
    const MODE: NumericMode = NumericMode::Float;

    fn parse(text: &str) -> Result<Self, ParseError> {
        let token = text.trim();
        if token.is_empty() {
            return Err(ParseError::Empty {
                mode: NumericMode::Float,
            });
        }
        let value: f64 = token.parse().map_err(|e: std::num::ParseFloatError| {
            ParseError::Malformed {
                token: token.to_owned(),
                mode: NumericMode::Float,
                reason: e.to_string(),
            }
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                token: token.to_owned(),
            });
        }
        Ok(Self(value))
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Add for F64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for F64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for F64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for F64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for F64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for F64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Negative zero prints as "0".
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(F64::parse("2.5").unwrap(), F64(2.5));
        assert_eq!(F64::parse(" -4 ").unwrap(), F64(-4.0));
        assert_eq!(F64::parse("1e-3").unwrap(), F64(0.001));
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(
            F64::parse("3/4"),
            Err(ParseError::Malformed { ref token, .. }) if token == "3/4"
        ));
        assert!(matches!(F64::parse("inf"), Err(ParseError::NonFinite { .. })));
        assert!(matches!(F64::parse("NaN"), Err(ParseError::NonFinite { .. })));
        assert!(matches!(F64::parse(""), Err(ParseError::Empty { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(F64(2.0).to_string(), "2");
        assert_eq!(F64(-0.0).to_string(), "0");
        assert_eq!(F64(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_division_by_self_is_exactly_one() {
        let a = F64(0.3);
        assert!((a / a).is_one());
    }
}
