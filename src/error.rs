//! Error types for the outstar simulator.
//!
//! This module provides a unified error type for all operations in the
//! crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for outstar operations.
///
/// This enum represents all possible error conditions that can occur
/// during a simulation run or while rendering its output.
#[derive(Error, Debug)]
pub enum OutstarError {
    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Plot rendering failed
    #[error("Plot rendering failed: {0}")]
    Plot(String),
}

/// A specialized `Result` type for outstar operations.
///
/// This is a type alias for `Result<T, OutstarError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, OutstarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutstarError::InvalidParameter("h1 must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: h1 must be positive");

        let err = OutstarError::Plot("backend closed".to_string());
        assert_eq!(err.to_string(), "Plot rendering failed: backend closed");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<f64> {
            Ok(0.5)
        }

        assert_eq!(returns_result().unwrap(), 0.5);
    }
}
