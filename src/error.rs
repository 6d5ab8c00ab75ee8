//! Error types for Gradian.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Gradian operations.
pub type Result<T> = std::result::Result<T, GradianError>;

/// Errors that can occur in Gradian.
#[derive(Debug, Error)]
pub enum GradianError {
    /// Neither a slope nor an angle was supplied in rate mode.
    #[error("Insufficient input: enter a slope or an angle")]
    MissingRate,

    /// A coordinate that must be finite was not.
    #[error("Non-finite coordinate: {name} = {value}")]
    NonFiniteCoordinate { name: &'static str, value: f64 },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl GradianError {
    /// Create a NonFiniteCoordinate error.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteCoordinate { name, value }
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRate | Self::NonFiniteCoordinate { .. }
        )
    }
}
