//! Error handling logic

use std::fmt;

/// Error kinds surfaced by grid construction and by operations addressed
/// with explicit coordinates. The evolution rule and the stepper are total
/// over well-formed grids and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QlifeError {
    /// A grid was requested with a non-positive or ill-shaped dimension.
    /// There is no physically meaningful clamp for a zero-sized lattice.
    InvalidDimension {
        /// InvalidDimension failure message
        message: String,
    },

    /// A coordinate landed outside the grid in an operation that has no
    /// periodic semantics (e.g. seeding a superposition). Such coordinates
    /// are rejected rather than wrapped.
    OutOfBounds {
        /// Offending row index
        row: usize,
        /// Offending column index
        col: usize,
        /// OutOfBounds failure message
        message: String,
    },

    /// A named pattern lookup did not match any known pattern.
    UnknownPattern {
        /// UnknownPattern failure message
        message: String,
    },
}

impl fmt::Display for QlifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QlifeError::InvalidDimension { message } => write!(f, "Invalid Dimension: {}", message),
            QlifeError::OutOfBounds { row, col, message } => write!(f, "Out of Bounds ({}, {}): {}", row, col, message),
            QlifeError::UnknownPattern { message } => write!(f, "Unknown Pattern: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QlifeError {}
