//! ICC error types.

use thiserror::Error;

/// Result type for ICC operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors that can occur while building profiles and transforms.
///
/// These never escape [`ColorEngine`](crate::ColorEngine) operations, which
/// log them and keep the previous transform; they surface only from the
/// lower-level constructors.
#[derive(Debug, Error)]
pub enum IccError {
    /// Failed to create a built-in profile.
    #[error("failed to create profile: {0}")]
    CreateFailed(String),

    /// Failed to create transform.
    #[error("failed to create transform: {0}")]
    TransformFailed(String),

    /// Invalid profile data.
    #[error("invalid profile data: {0}")]
    InvalidProfile(String),

    /// Profile bytes were empty.
    #[error("empty profile data")]
    Empty,
}
