//! Terminal classification of a solve.

use std::fmt;

/// Why a system has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolutionReason {
    /// A row reduced to `0 = c` with `c ≠ 0`.
    ContradictoryEquation {
        /// Zero-based row where the contradiction was found.
        row: usize,
    },
    /// The augmented matrix has higher rank than the coefficient block.
    ///
    /// Only reported by the rank-aware policy.
    Inconsistent,
}

impl fmt::Display for NoSolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoSolutionReason::ContradictoryEquation { row } => {
                write!(f, "contradictory equation (row {})", row + 1)
            }
            NoSolutionReason::Inconsistent => f.write_str("inconsistent system"),
        }
    }
}

/// Result of an elimination.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// The constant column of the reduced matrix, one value per unknown.
    Unique(Vec<R>),
    /// The system cannot be satisfied.
    NoSolution(NoSolutionReason),
    /// The system is consistent but rank deficient.
    ///
    /// Only reported by the rank-aware policy. `particular` sets every free
    /// unknown to zero.
    InfiniteSolutions {
        /// One solution of the system.
        particular: Vec<R>,
        /// Zero-based indices of the free unknowns.
        free_columns: Vec<usize>,
    },
}

impl<R> Outcome<R> {
    /// Returns true for [`Outcome::Unique`].
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Outcome::Unique(_))
    }

    /// Returns true for [`Outcome::NoSolution`].
    #[must_use]
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Outcome::NoSolution(_))
    }

    /// The unique solution, if there is one.
    #[must_use]
    pub fn solution(&self) -> Option<&[R]> {
        match self {
            Outcome::Unique(x) => Some(x),
            _ => None,
        }
    }

    /// Converts the scalars of this outcome.
    #[must_use]
    pub fn map<S>(self, f: impl FnMut(R) -> S) -> Outcome<S> {
        match self {
            Outcome::Unique(x) => Outcome::Unique(x.into_iter().map(f).collect()),
            Outcome::NoSolution(reason) => Outcome::NoSolution(reason),
            Outcome::InfiniteSolutions {
                particular,
                free_columns,
            } => Outcome::InfiniteSolutions {
                particular: particular.into_iter().map(f).collect(),
                free_columns,
            },
        }
    }
}

impl<R: fmt::Display> Outcome<R> {
    /// One `xₖ = value` line per unknown, with subscript indices from zero.
    ///
    /// Empty unless the solution is unique.
    #[must_use]
    pub fn solution_lines(&self) -> Vec<String> {
        self.solution()
            .map(|x| {
                x.iter()
                    .enumerate()
                    .map(|(k, v)| format!("x{} = {v}", subscript(k)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Short verdict text.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Outcome::Unique(_) => "unique solution".to_owned(),
            Outcome::NoSolution(reason) => format!("no solution: {reason}"),
            Outcome::InfiniteSolutions { free_columns, .. } => {
                let free: Vec<String> = free_columns
                    .iter()
                    .map(|&k| format!("x{}", subscript(k)))
                    .collect();
                format!("infinitely many solutions (free: {})", free.join(", "))
            }
        }
    }
}

fn subscript(k: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    k.to_string()
        .bytes()
        .map(|b| DIGITS[usize::from(b - b'0')])
        .collect()
}
