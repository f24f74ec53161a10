/*!
 * Error types for the padshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a talks pad export
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line opened with the assignment arrow but matched no known line shape.
    /// Carries the raw line for diagnostics.
    #[error("error parsing the following line:\n\t{0}")]
    MalformedLine(String),

    /// A clock component that should look like HH:MM did not parse
    #[error("invalid clock time: {0}")]
    InvalidClock(String),

    /// A partial-shift window that should look like HH:MM-HH:MM did not parse
    #[error("invalid shift window: {0}")]
    InvalidWindow(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from pad parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
