//! Error types for the path construction crate.
//!
//! This module provides structured error types for path building and for
//! parsing serialized path descriptions.

use thiserror::Error;

/// Errors that can occur while building a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A negative (or non-finite) corner radius was requested.
    #[error("Invalid corner radius: {radius} (must be >= 0)")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// `build()` was called before any `move_to()`.
    #[error("Path has no start point; call move_to() first")]
    MissingStart,

    /// `move_to()` was called on a path that already has a start point.
    #[error("Path already started at ({x}, {y})")]
    AlreadyStarted {
        /// X coordinate of the existing start point.
        x: f64,
        /// Y coordinate of the existing start point.
        y: f64,
    },
}

/// Errors related to parsing a serialized path description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathParseError {
    /// The input contains no commands.
    #[error("Empty path description")]
    Empty,

    /// A command letter that is not part of the supported grammar.
    #[error("Unexpected command '{command}' at offset {offset}")]
    UnexpectedCommand { command: char, offset: usize },

    /// A command ended before all of its operands were read.
    #[error("Command '{command}' expects {expected} operands")]
    MissingOperand { command: char, expected: usize },

    /// An operand could not be parsed as a number.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// Result type alias for path building.
pub type PathResult<T> = Result<T, PathError>;
