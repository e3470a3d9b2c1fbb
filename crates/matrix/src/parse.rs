//! Parsing matrices from comma-separated text.
//!
//! Each line is one row; values within a row are separated by commas and
//! trimmed of surrounding whitespace. All rows must have the same number of
//! values. There is no header line and blank lines are not skipped.

use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::dense::DenseMatrix;
use crate::error::MatrixError;

impl DenseMatrix {
    /// Reads a matrix from a comma-separated text file.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::NotFound`] if the file does not exist or cannot be opened.
    /// - [`MatrixError::MalformedInput`] if rows differ in length, a token is
    ///   not a number, or the file has no rows.
    /// - [`MatrixError::Io`] for any other read failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::IsADirectory => {
                MatrixError::NotFound {
                    path: path.to_path_buf(),
                }
            }
            _ => MatrixError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let matrix: DenseMatrix = text.parse()?;
        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            "parsed matrix file"
        );
        Ok(matrix)
    }
}

impl FromStr for DenseMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        let mut n_cols = 0usize;

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let tokens: Vec<&str> = line.split(',').collect();
            if n_cols == 0 {
                n_cols = tokens.len();
            } else if tokens.len() != n_cols {
                return Err(MatrixError::MalformedInput {
                    line: line_no,
                    reason: format!(
                        "expected {n_cols} values, got {} (are all rows the same length?)",
                        tokens.len()
                    ),
                });
            }
            for token in tokens {
                let token = token.trim();
                let value: f64 = token.parse().map_err(|_| MatrixError::MalformedInput {
                    line: line_no,
                    reason: format!("not a number: {token:?}"),
                })?;
                values.push(value);
            }
        }

        if n_cols == 0 {
            return Err(MatrixError::MalformedInput {
                line: 0,
                reason: "input contains no rows".to_string(),
            });
        }
        DenseMatrix::from_values(&values, n_cols)
    }
}
