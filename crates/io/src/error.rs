//! Error types for trek-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the trek-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the output extension does not select a path format.
    #[error("unsupported output extension for {} (expected .txt or .dat)", path.display())]
    UnsupportedExtension {
        /// Path whose extension was not recognised.
        path: PathBuf,
    },

    /// Returned when the output file cannot be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
