//! Runtime choice of numeric representation.

use std::fmt;
use std::str::FromStr;

/// Which scalar field a computation runs over.
///
/// Chosen once per solve request; every entry of a matrix shares it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumericMode {
    /// Exact arbitrary precision rationals.
    #[default]
    Rational,
    /// IEEE 754 double precision.
    Float,
}

impl NumericMode {
    /// Returns the lowercase name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NumericMode::Rational => "rational",
            NumericMode::Float => "float",
        }
    }
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rational" => Ok(NumericMode::Rational),
            "float" => Ok(NumericMode::Float),
            other => Err(format!("unknown numeric mode {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!("rational".parse(), Ok(NumericMode::Rational));
        assert_eq!(" Float ".parse(), Ok(NumericMode::Float));
        assert_eq!(NumericMode::Float.to_string(), "float");
        assert!("complex".parse::<NumericMode>().is_err());
        assert!("fraction".parse::<NumericMode>().is_err());
        assert_eq!(NumericMode::default(), NumericMode::Rational);
    }
}
