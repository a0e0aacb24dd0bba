//! Error types for the layout crate.

use puzzlebox_core::PathError;
use std::io;
use thiserror::Error;

/// Errors that can occur while laying out or exporting a box template.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Box dimensions are invalid (zero, negative, or inconsistent).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A feature path could not be built.
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// I/O error while writing the exported document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
