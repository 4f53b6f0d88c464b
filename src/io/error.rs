//! Error types for planning operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all planning operations
///
/// Placement rejection is deliberately not represented here: a refused
/// `add_brick` is a normal negative result the search uses for pruning, not
/// an error.
#[derive(Debug)]
pub enum PlanError {
    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decode error
        source: image::ImageError,
    },

    /// Failed to save a rendered image
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying encode error
        source: image::ImageError,
    },

    /// Failed to read the catalog file
    CatalogRead {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Catalog file contents did not parse
    CatalogParse {
        /// Description of what is wrong with the data
        reason: String,
    },

    /// No source pixel matched any palette color
    NoColorablePixels {
        /// Board width in pegs
        width: i32,
        /// Board height in pegs
        height: i32,
    },

    /// The search found no legal continuation toward full coverage
    Unsolvable {
        /// Bricks placed before the search stalled
        placed: usize,
        /// Pegs covered before the search stalled
        covered: usize,
        /// Pegs that needed covering
        colorable: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::CatalogRead { path, source } => {
                write!(f, "Failed to read catalog '{}': {source}", path.display())
            }
            Self::CatalogParse { reason } => {
                write!(f, "Invalid catalog data: {reason}")
            }
            Self::NoColorablePixels { width, height } => {
                write!(
                    f,
                    "No pixel in the {width}x{height} image matched a palette color"
                )
            }
            Self::Unsolvable {
                placed,
                covered,
                colorable,
            } => {
                write!(
                    f,
                    "No legal placement continues the search ({placed} bricks placed, \
                     {covered} of {colorable} pegs covered)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::CatalogRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for planning results
pub type Result<T> = std::result::Result<T, PlanError>;

/// Create a catalog parse error
pub fn catalog_parse_error(reason: impl ToString) -> PlanError {
    PlanError::CatalogParse {
        reason: reason.to_string(),
    }
}
