//! Error types for the keystream core.

use thiserror::Error;

/// Errors from cube construction and keystream derivation.
///
/// All errors are raised before any state is mutated; a failed construction
/// leaves nothing behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Cube dimension below the supported minimum of 2
    #[error("invalid cube dimension {dimension}: must be at least 2")]
    InvalidDimension {
        /// The rejected dimension
        dimension: usize,
    },
}
