//! Planner error types.

use std::path::PathBuf;

use domain::ValidationError;
use packing::PackingError;
use thiserror::Error;

/// Errors that stop the planner before a report can be produced.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The manifest could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest or report is not valid JSON for its shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An item in the manifest is invalid.
    #[error("Invalid item #{index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Packing could not be set up.
    #[error("Packing error: {0}")]
    Packing(#[from] PackingError),
}

/// Convenience type alias for planner results.
pub type Result<T> = std::result::Result<T, PlannerError>;
