//! Error types for tree refinement, curve traversal and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all refinement, traversal and export operations
#[derive(Debug)]
pub enum PeanoError {
    /// Index or position outside the declared domain of a lookup
    Domain {
        /// Operation that received the value
        operation: &'static str,
        /// The offending value
        value: usize,
        /// Exclusive upper bound of the valid domain
        limit: usize,
    },

    /// Cell geometry with an axis count other than 2 or 3
    UnsupportedDimension {
        /// Number of axes supplied
        axes: usize,
    },

    /// Peano traversal requested for a tree without motif tables
    ///
    /// Only the 3x3 replacement pattern is defined; 3x3x3 trees can be refined
    /// and enumerated but not linearised.
    UnsupportedTraversal {
        /// Number of axes of the tree
        axes: usize,
    },

    /// Offset and size sequences disagree with each other or with the tree
    GeometryMismatch {
        /// Expected number of axes
        expected: usize,
        /// Number of axes found
        found: usize,
    },

    /// The refinement predicate kept subdividing past the safety ceiling
    UnboundedRefinement {
        /// Depth ceiling that was hit
        ceiling: usize,
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

    /// Leaf cells do not tile the domain exactly
    InvalidTiling {
        /// Fine cells covered by no leaf
        gaps: usize,
        /// Fine cells covered by more than one leaf
        overlaps: usize,
        /// Fine cells of leaves lying outside the domain
        outside: usize,
    },

    /// Failed to encode or save a rendered image
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
}

impl fmt::Display for PeanoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain {
                operation,
                value,
                limit,
            } => {
                write!(
                    f,
                    "Value {value} is outside the domain of {operation} (expected < {limit})"
                )
            }
            Self::UnsupportedDimension { axes } => {
                write!(f, "Unsupported dimensionality {axes} (expected 2 or 3)")
            }
            Self::UnsupportedTraversal { axes } => {
                write!(
                    f,
                    "Peano traversal is only defined for 2-D trees, got {axes} axes"
                )
            }
            Self::GeometryMismatch { expected, found } => {
                write!(f, "Geometry has {found} axes where {expected} were expected")
            }
            Self::UnboundedRefinement { ceiling } => {
                write!(
                    f,
                    "Refinement predicate still subdividing at depth ceiling {ceiling}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTiling {
                gaps,
                overlaps,
                outside,
            } => {
                write!(
                    f,
                    "Leaves do not tile the domain: {gaps} gaps, {overlaps} overlaps, {outside} outside"
                )
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
        }
    }
}

impl std::error::Error for PeanoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, PeanoError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`PeanoError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PeanoError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PeanoError {
    PeanoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a domain error for a lookup that received `value`
pub const fn domain_error(operation: &'static str, value: usize, limit: usize) -> PeanoError {
    PeanoError::Domain {
        operation,
        value,
        limit,
    }
}
