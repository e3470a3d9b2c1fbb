//! Text encodings of a lattice path.

use std::path::Path;

use trek_lattice::Point;

use crate::error::IoError;

/// On-disk layout of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFormat {
    /// One `(x, y)` per line (`.txt`).
    Lines,
    /// All coordinates as `x y x y ...` on a single line (`.dat`).
    Flat,
}

impl PathFormat {
    /// Selects the format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedExtension`] for anything other than
    /// `.txt` or `.dat` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") => Ok(Self::Lines),
            Some("dat") => Ok(Self::Flat),
            _ => Err(IoError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Renders `points` in the given format, including the trailing newline(s).
///
/// ```
/// use trek_io::{PathFormat, format_path};
/// use trek_lattice::Point;
///
/// let path = [Point::new(0, 0), Point::new(0, 1)];
/// assert_eq!(format_path(&path, PathFormat::Lines), "(0, 0)\n(0, 1)\n");
/// assert_eq!(format_path(&path, PathFormat::Flat), "0 0 0 1\n");
/// ```
pub fn format_path(points: &[Point], format: PathFormat) -> String {
    match format {
        PathFormat::Lines => {
            if points.is_empty() {
                return String::new();
            }
            let lines: Vec<String> = points.iter().map(Point::to_string).collect();
            let mut out = lines.join("\n");
            out.push('\n');
            out
        }
        PathFormat::Flat => {
            let coords: Vec<String> = points.iter().map(|p| format!("{} {}", p.x, p.y)).collect();
            let mut out = coords.join(" ");
            out.push('\n');
            out
        }
    }
}
