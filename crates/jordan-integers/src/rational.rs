//! Exact fractions for the elimination engine, plus the `p/q` literal
//! grammar used at the input boundary.

use dashu::base::{Abs, Inverse, Signed as _, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::integer::IntegerLiteralError;
use crate::Integer;

/// A fraction in lowest terms whose denominator is positive.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

/// Reasons a rational literal can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalLiteralError {
    /// The numerator is not an integer literal.
    #[error("bad numerator: {0}")]
    Numerator(IntegerLiteralError),

    /// The denominator is not an integer literal.
    #[error("bad denominator: {0}")]
    Denominator(IntegerLiteralError),

    /// The denominator is zero.
    #[error("denominator is zero")]
    ZeroDenominator,
}

impl Rational {
    /// `numerator / denominator`, or `None` when the denominator is zero.
    ///
    /// The sign of a negative denominator moves to the numerator.
    #[must_use]
    pub fn checked_new(numerator: Integer, denominator: Integer) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        let flip = denominator.is_negative();
        let magnitude =
            RBig::from_parts(numerator.into_inner(), denominator.into_inner().unsigned_abs());
        Some(Self(if flip { -magnitude } else { magnitude }))
    }

    /// `numerator / denominator` from machine integers.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "zero denominator");
        let magnitude = RBig::from_parts(IBig::from(numerator), denominator.unsigned_abs().into());
        Self(if denominator < 0 { -magnitude } else { magnitude })
    }

    /// The integer `n` as a fraction `n/1`.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Parses `"<int>"` or `"<int>/<int>"`.
    ///
    /// Whitespace around the whole literal and around either side of the
    /// slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`RationalLiteralError`] if either side is not an integer
    /// literal or the denominator is zero.
    pub fn parse_literal(text: &str) -> Result<Self, RationalLiteralError> {
        let Some((num, den)) = text.trim().split_once('/') else {
            return Integer::parse_literal(text)
                .map(Self::from_integer)
                .map_err(RationalLiteralError::Numerator);
        };

        let numerator = Integer::parse_literal(num).map_err(RationalLiteralError::Numerator)?;
        let denominator = Integer::parse_literal(den).map_err(RationalLiteralError::Denominator)?;
        Self::checked_new(numerator, denominator).ok_or(RationalLiteralError::ZeroDenominator)
    }

    /// Numerator and (positive) denominator.
    #[must_use]
    pub fn parts(&self) -> (Integer, Integer) {
        (
            Integer::from(self.0.numerator().clone()),
            Integer::from(IBig::from(self.0.denominator().clone())),
        )
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// `1 / self`, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        (!self.0.is_zero()).then(|| Self(self.0.clone().inv()))
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match (self.0.is_zero(), self.0.is_positive()) {
            (true, _) => 0,
            (false, true) => 1,
            (false, false) => -1,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl FromStr for Rational {
    type Err = RationalLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

/// Bare integer when the denominator is one, `n/d` otherwise.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (num, den) = (self.0.numerator(), self.0.denominator());
        if den.is_one() {
            write!(f, "{num}")
        } else {
            write!(f, "{num}/{den}")
        }
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Rational {
                Rational(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl std::ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }
}
