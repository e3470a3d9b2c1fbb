//! Error types for the trek-matrix crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the trek-matrix crate.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Returned when an index pair lies outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },

    /// Returned when two matrices cannot be multiplied.
    #[error("dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Returned when a flat value array is given a column count of zero.
    #[error("column count must be positive")]
    ZeroColumns,

    /// Returned when a matrix file does not exist or cannot be opened.
    #[error("matrix file not found: {}", path.display())]
    NotFound {
        /// Path that could not be opened.
        path: PathBuf,
    },

    /// Returned when matrix text is structurally invalid.
    #[error("malformed matrix input at line {line}: {reason}")]
    MalformedInput {
        /// 1-indexed line number where the problem was found.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Wraps any other I/O failure while reading a matrix file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
