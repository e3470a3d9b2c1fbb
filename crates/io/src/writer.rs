//! Writing paths to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;
use trek_lattice::Point;

use crate::error::IoError;
use crate::format::{PathFormat, format_path};

/// Writes `points` to `path`, choosing the layout from the file extension.
///
/// `.txt` writes one `(x, y)` per line; `.dat` writes `x y x y ...` on one line.
/// An existing file is truncated.
///
/// # Errors
///
/// - [`IoError::UnsupportedExtension`] if the extension is not `.txt` or `.dat`.
/// - [`IoError::Write`] if the file cannot be created or written.
pub fn write_path(path: impl AsRef<Path>, points: &[Point]) -> Result<PathFormat, IoError> {
    let path = path.as_ref();
    let format = PathFormat::from_path(path)?;
    let io_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_path(points, format).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), ?format, n_points = points.len(), "wrote path");
    Ok(format)
}
