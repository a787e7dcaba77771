//! Packing error types.

use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while setting up aggregation or packing.
///
/// An order that does not fit is not an error; it is recorded as
/// unplaceable.
#[derive(Debug, Error)]
pub enum PackingError {
    /// Invalid input value.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for packing results.
pub type Result<T> = std::result::Result<T, PackingError>;
