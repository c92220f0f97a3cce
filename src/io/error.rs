//! Error types for board construction, rendering output and image generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered or original image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image dimensions are not an exact multiple of the grid
    ///
    /// Only raised when the division policy rejects uneven grids.
    UnevenGrid {
        /// Source image size (width, height)
        image: (u32, u32),
        /// Requested grid (columns, rows)
        grid: (u32, u32),
    },

    /// Explicit staging order is not a permutation of the tile set
    InvalidArrangement {
        /// Number of tiles on the board
        expected: usize,
        /// Description of what's wrong with the arrangement
        reason: String,
    },

    /// Pointer script line could not be parsed
    ScriptParse {
        /// One-based line number
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// Image generation request failed
    ///
    /// Covers transport errors, non-success statuses, malformed responses
    /// and failures fetching the generated image.
    GenerationFailed {
        /// Endpoint or image URL involved
        url: String,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnevenGrid { image, grid } => {
                write!(
                    f,
                    "Image size {}x{} does not divide evenly into {}x{} tiles",
                    image.0, image.1, grid.0, grid.1
                )
            }
            Self::InvalidArrangement { expected, reason } => {
                write!(f, "Invalid arrangement for {expected} tiles: {reason}")
            }
            Self::ScriptParse { line, reason } => {
                write!(f, "Pointer script error on line {line}: {reason}")
            }
            Self::GenerationFailed { url, reason } => {
                write!(f, "Image generation failed ({url}): {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a generation failure error
pub fn generation_failed(url: &impl ToString, reason: &impl ToString) -> PuzzleError {
    PuzzleError::GenerationFailed {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a script parse error
pub fn script_error(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::ScriptParse {
        line,
        reason: reason.to_string(),
    }
}
