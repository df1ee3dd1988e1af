//! Error types for the spatial partition crate
//!
//! This module defines the error types used throughout the crate,
//! covering tree construction, world-bounds violations, and malformed
//! bounding volumes.

use std::fmt;

/// Result type for spatial partition operations
pub type Result<T> = std::result::Result<T, Error>;

/// Spatial partition errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tree configuration rejected at construction (bad bounds, depth too large)
    InvalidConfiguration(String),

    /// A point or bounding box lies outside the configured world extent
    OutOfWorldBounds(String),

    /// A bounding volume has negative or non-finite extents
    DegenerateExtent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::OutOfWorldBounds(msg) => write!(f, "Out of world bounds: {}", msg),
            Error::DegenerateExtent(msg) => write!(f, "Degenerate extent: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error`] variant from a formatted message, logging it at ERROR severity.
///
/// # Example
///
/// ```ignore
/// let err = partition_err!("spatial::PartitionTree", InvalidConfiguration,
///     "max_depth {} too large", depth);
/// ```
#[macro_export]
macro_rules! partition_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::partition_error!($source, "{}", message);
        $crate::spatial::Error::$variant(message)
    }};
}

/// Return early with an [`Error`] variant, logging it at ERROR severity.
///
/// # Example
///
/// ```ignore
/// if half_size <= 0.0 {
///     partition_bail!("spatial::TreeConfig", InvalidConfiguration,
///         "half_size must be positive, got {}", half_size);
/// }
/// ```
#[macro_export]
macro_rules! partition_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::partition_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
