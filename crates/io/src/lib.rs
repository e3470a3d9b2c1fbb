//! # trek-io
//!
//! Persist lattice walk paths as plain text. The destination's extension
//! picks the layout: `.txt` for one `(x, y)` per line, `.dat` for a single
//! line of space-separated coordinates.

mod error;
mod format;
mod writer;

pub use error::IoError;
pub use format::{PathFormat, format_path};
pub use writer::write_path;
