//! Errors raised while reading scalars from text.

use thiserror::Error;

use jordan_integers::RationalLiteralError;

use crate::mode::NumericMode;

/// A token did not match the numeric grammar of the active mode.
///
/// Every variant carries the offending token (already trimmed).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token was empty or only whitespace.
    #[error("empty {mode} entry")]
    Empty {
        /// Mode that was parsing.
        mode: NumericMode,
    },

    /// A rational token had a zero denominator.
    #[error("zero denominator in {token:?}")]
    ZeroDenominator {
        /// The offending token.
        token: String,
    },

    /// A float token parsed to an infinity or NaN.
    #[error("{token:?} is not a finite number")]
    NonFinite {
        /// The offending token.
        token: String,
    },

    /// The token is not a number in the given mode.
    #[error("invalid {mode} number {token:?}: {reason}")]
    Malformed {
        /// The offending token.
        token: String,
        /// Mode that was parsing.
        mode: NumericMode,
        /// Lower level description of the failure.
        reason: String,
    },
}

impl ParseError {
    /// Returns the offending token; empty for [`ParseError::Empty`].
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            ParseError::Empty { .. } => "",
            ParseError::ZeroDenominator { token }
            | ParseError::NonFinite { token }
            | ParseError::Malformed { token, .. } => token,
        }
    }

    pub(crate) fn from_rational(token: &str, err: RationalLiteralError) -> Self {
        match err {
            RationalLiteralError::ZeroDenominator => ParseError::ZeroDenominator {
                token: token.to_owned(),
            },
            other => ParseError::Malformed {
                token: token.to_owned(),
                mode: NumericMode::Rational,
                reason: other.to_string(),
            },
        }
    }
}
