//! The field of rational numbers Q.

use crate::error::ParseError;
use crate::mode::NumericMode;
use crate::traits::{Field, OrderedRing, Ring, Scalar};
use crate::value::Value;
use jordan_integers::Rational;

/// The field of rational numbers.
///
/// This is a wrapper around `jordan_integers::Rational` that implements
/// the algebraic traits. All arithmetic is exact.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        self.0.checked_recip().map(Self)
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl Scalar for Q {
    const MODE: NumericMode = NumericMode::Rational;

    fn parse(text: &str) -> Result<Self, ParseError> {
        let token = text.trim();
        if token.is_empty() {
            return Err(ParseError::Empty {
                mode: NumericMode::Rational,
            });
        }
        Rational::parse_literal(token)
            .map(Self)
            .map_err(|e| ParseError::from_rational(token, e))
    }

    fn into_value(self) -> Value {
        Value::Rational(self)
    }
}

// Implement arithmetic operations
impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 8/12 + 9/12 = 17/12
        let sum = a.clone() + b.clone();
        assert_eq!(sum, Q::new(17, 12));

        // 2/3 * 3/4 = 6/12 = 1/2
        let prod = a * b;
        assert_eq!(prod, Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();

        // 3/5 * 5/3 = 1
        assert!((a * inv).is_one());
        assert_eq!(Q::zero().inv(), None);
    }

    #[test]
    fn test_division_by_self_is_exactly_one() {
        let a = Q::new(-7, 9);
        assert!((a.clone() / a).is_one());
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(Q::parse(" 3/4 ").unwrap().to_string(), "3/4");
        assert_eq!(Q::parse("8/4").unwrap().to_string(), "2");
        assert_eq!(
            Q::parse("5/0"),
            Err(ParseError::ZeroDenominator {
                token: "5/0".to_owned()
            })
        );
        assert_eq!(
            Q::parse("   "),
            Err(ParseError::Empty {
                mode: NumericMode::Rational
            })
        );
        let err = Q::parse("2.5").unwrap_err();
        assert_eq!(err.token(), "2.5");
    }

    #[test]
    fn test_ordering_and_abs() {
        assert!(Q::new(-3, 2).abs() > Q::new(4, 3));
        assert_eq!(Q::new(-1, 2).signum(), -1);
    }
}
