//! Dense matrix implementation for small matrices.
//!
//! Elimination works on a handful of rows, so entries live in one
//! row-major `Vec` and row operations are plain index loops.

use std::ops::{Index, IndexMut};

use jordan_rings::traits::{Field, Ring};

use crate::error::InvariantViolation;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R> DenseMatrix<R> {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::RaggedRow`] if the rows differ in length.
    pub fn try_from_rows(rows: Vec<Vec<R>>) -> Result<Self, InvariantViolation> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(InvariantViolation::RaggedRow {
                row,
                expected: num_cols,
                found,
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[R]> + '_ {
        // `chunks` panics on zero; an empty matrix simply has no rows.
        self.data.chunks(self.num_cols.max(1)).take(self.num_rows)
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Applies `f` to every entry, keeping the shape.
    #[must_use]
    pub fn map<S>(self, f: impl FnMut(R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            data: self.data.into_iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> DenseMatrix<R> {
    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Matrix-vector product over the first `x.len()` columns.
    ///
    /// Trailing columns are ignored, so an augmented `[A|b]` multiplied by
    /// an n-vector yields `A·x`.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        debug_assert!(x.len() <= self.num_cols);
        self.rows()
            .map(|row| {
                row.iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Subtracts a scaled row from another: row[target] -= factor * row[source].
    pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * factor.clone();
            self[(target, k)] = self[(target, k)].clone() - val;
        }
    }

    /// Returns true if the entries of `row` in `cols` are all zero.
    #[must_use]
    pub fn is_zero_span(&self, row: usize, cols: std::ops::Range<usize>) -> bool {
        self.row(row)[cols].iter().all(Ring::is_zero)
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Divides every entry of a row by `divisor`.
    ///
    /// The caller guarantees `divisor` is nonzero. Division rather than
    /// multiplication by the inverse keeps `x / x == 1` exact for floats.
    pub fn div_row(&mut self, row: usize, divisor: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() / divisor.clone();
        }
    }

    /// Reduced row echelon form (RREF) using Gauss-Jordan elimination.
    ///
    /// Pivots are the first nonzero entry found in each column. Returns the
    /// reduced matrix and its pivot columns in row order; the rank is the
    /// number of pivot columns.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>) {
        let mut m = self.clone();
        let mut pivot_cols = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }

            // Find pivot (first non-zero in column)
            let Some(found) = (pivot_row..m.num_rows).find(|&row| !m[(row, col)].is_zero()) else {
                continue;
            };

            m.swap_rows(pivot_row, found);

            let pivot_val = m[(pivot_row, col)].clone();
            m.div_row(pivot_row, &pivot_val);

            // Eliminate entries above and below the pivot
            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, col)].is_zero() {
                    let factor = m[(row, col)].clone();
                    m.sub_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_cols.push(col);
            pivot_row += 1;
        }

        (m, pivot_cols)
    }

    /// Returns the rank of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().1.len()
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
