//! Row-major dense matrix storage and arithmetic.

use std::fmt;

use crate::error::MatrixError;

/// A dense `rows x cols` matrix of `f64` stored row-major in one flat buffer.
///
/// Every access goes through a bounds check; out-of-range indices are
/// reported as [`MatrixError::OutOfRange`] and never clamped. `Clone` yields
/// an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<f64>,
}

impl DenseMatrix {
    /// Creates a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![0.0; rows * cols],
        }
    }

    /// Creates a `size x size` matrix of zeros.
    pub fn square(size: usize) -> Self {
        Self::zeros(size, size)
    }

    /// Creates a `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::square(size);
        for i in 0..size {
            m.entries[i * size + i] = 1.0;
        }
        m
    }

    /// Builds a matrix from consecutive runs of `cols` values.
    ///
    /// The row count is `ceil(values.len() / cols)`. When the values do not
    /// fill the final row, its remaining cells are zero.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroColumns`] if `cols == 0`.
    pub fn from_values(values: &[f64], cols: usize) -> Result<Self, MatrixError> {
        if cols == 0 {
            return Err(MatrixError::ZeroColumns);
        }
        let rows = values.len().div_ceil(cols);
        let mut entries = Vec::with_capacity(rows * cols);
        entries.extend_from_slice(values);
        entries.resize(rows * cols, 0.0);
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Flat row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Returns row `i` as a slice, or `None` if `i` is out of range.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.entries[start..start + self.cols])
    }

    /// Returns the entry at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if either index is outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let idx = self.index(i, j)?;
        Ok(self.entries[idx])
    }

    /// Sets the entry at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if either index is outside the matrix.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatrixError> {
        let idx = self.index(i, j)?;
        self.entries[idx] = value;
        Ok(())
    }

    /// Sets every entry to `0.0`.
    pub fn zero(&mut self) {
        self.entries.fill(0.0);
    }

    /// Standard matrix product `self * other`.
    ///
    /// The result has shape `(self.rows(), other.cols())`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut product = DenseMatrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            let lhs = &self.entries[i * self.cols..(i + 1) * self.cols];
            for j in 0..other.cols {
                let mut acc = 0.0;
                for (k, &a) in lhs.iter().enumerate() {
                    acc += a * other.entries[k * other.cols + j];
                }
                product.entries[i * other.cols + j] = acc;
            }
        }
        Ok(product)
    }

    /// Renders the matrix as a bracketed list of rows joined by `row_sep`.
    ///
    /// ```
    /// use trek_matrix::DenseMatrix;
    ///
    /// let m = DenseMatrix::from_values(&[1.0, 0.5, 0.25, 2.0], 2).unwrap();
    /// assert_eq!(m.format_rows(" | "), "[[1.0, 0.5] | [0.25, 2.0]]");
    /// ```
    pub fn format_rows(&self, row_sep: &str) -> String {
        let rows: Vec<String> = (0..self.rows)
            .filter_map(|i| self.row(i))
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:?}")).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        format!("[{}]", rows.join(row_sep))
    }

    /// Multi-line form with one row per line.
    pub fn pretty(&self) -> String {
        self.format_rows(",\n")
    }

    fn index(&self, i: usize, j: usize) -> Result<usize, MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::OutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(i * self.cols + j)
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_rows(", "))
    }
}
