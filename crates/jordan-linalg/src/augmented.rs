//! Augmented systems `[A|b]`.

use std::fmt;

use jordan_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;
use crate::error::InvariantViolation;

/// An n × (n+1) matrix: n coefficient columns followed by the constants.
///
/// The shape is checked once at construction, so every index the engine
/// computes from `dimension()` is in bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<R> {
    inner: DenseMatrix<R>,
}

impl<R> AugmentedMatrix<R> {
    /// Builds an augmented system from its rows.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if the rows are ragged, there are
    /// no rows, or the matrix is not n × (n+1).
    pub fn try_from_rows(rows: Vec<Vec<R>>) -> Result<Self, InvariantViolation> {
        Self::try_from_dense(DenseMatrix::try_from_rows(rows)?)
    }

    /// Wraps a dense matrix that already has the augmented shape.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::NotAugmented`] for any other shape.
    pub fn try_from_dense(inner: DenseMatrix<R>) -> Result<Self, InvariantViolation> {
        let (rows, cols) = (inner.num_rows(), inner.num_cols());
        if rows == 0 || cols != rows + 1 {
            return Err(InvariantViolation::NotAugmented { rows, cols });
        }
        Ok(Self { inner })
    }

    /// Number of unknowns (and equations).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.inner.num_rows()
    }

    /// Coefficient `a[row][col]`.
    #[must_use]
    pub fn coefficient(&self, row: usize, col: usize) -> &R {
        debug_assert!(col < self.dimension());
        &self.inner[(row, col)]
    }

    /// Constant term `b[row]`.
    #[must_use]
    pub fn constant(&self, row: usize) -> &R {
        &self.inner[(row, self.dimension())]
    }

    /// Borrows the underlying dense matrix.
    #[must_use]
    pub fn as_dense(&self) -> &DenseMatrix<R> {
        &self.inner
    }

    pub(crate) fn as_dense_mut(&mut self) -> &mut DenseMatrix<R> {
        &mut self.inner
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<S>(self, f: impl FnMut(R) -> S) -> AugmentedMatrix<S> {
        AugmentedMatrix {
            inner: self.inner.map(f),
        }
    }
}

impl<R: Ring> AugmentedMatrix<R> {
    /// Returns true if every coefficient of `row` is zero.
    #[must_use]
    pub fn has_zero_coefficients(&self, row: usize) -> bool {
        self.inner.is_zero_span(row, 0..self.dimension())
    }

    /// Returns true if `row` reads `0 = c` with `c ≠ 0`.
    #[must_use]
    pub fn is_contradiction(&self, row: usize) -> bool {
        self.has_zero_coefficients(row) && !self.constant(row).is_zero()
    }

    /// The constant column, which holds the solution once fully reduced.
    #[must_use]
    pub fn constants(&self) -> Vec<R> {
        self.inner.col(self.dimension())
    }

    /// Computes `A·x − b`.
    ///
    /// A zero vector means `x` solves the system.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::SolutionLength`] if `x` does not have
    /// one entry per unknown.
    pub fn residual(&self, x: &[R]) -> Result<Vec<R>, InvariantViolation> {
        let n = self.dimension();
        if x.len() != n {
            return Err(InvariantViolation::SolutionLength {
                expected: n,
                found: x.len(),
            });
        }
        Ok(self
            .inner
            .mv(x)
            .into_iter()
            .zip(self.constants())
            .map(|(ax, b)| ax - b)
            .collect())
    }
}

impl<R: fmt::Display> fmt::Display for AugmentedMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        f.write_str("[")?;
        for (i, row) in self.inner.rows().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            for (j, entry) in row.iter().enumerate() {
                match j {
                    0 => {}
                    j if j == n => f.write_str(" | ")?,
                    _ => f.write_str(", ")?,
                }
                write!(f, "{entry}")?;
            }
        }
        f.write_str("]")
    }
}
