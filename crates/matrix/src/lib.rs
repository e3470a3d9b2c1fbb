//! Dense row-major matrices for Markov transition data.
//!
//! Provides bounds-checked access, matrix multiplication, bracketed text
//! rendering and parsing from comma-separated text files. This is not a
//! general linear-algebra library: there is no inverse, determinant or
//! decomposition.
//!
//! # Quick start
//!
//! ```rust
//! use trek_matrix::DenseMatrix;
//!
//! let p: DenseMatrix = "0.9,0.1\n0.4,0.6".parse().unwrap();
//! let p2 = p.multiply(&p).unwrap();
//! assert_eq!((p2.rows(), p2.cols()), (2, 2));
//! ```

pub mod dense;
pub mod error;
pub mod parse;

pub use dense::DenseMatrix;
pub use error::MatrixError;
