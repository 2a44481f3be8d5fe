//! Error types for the rating crate
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating and balancing scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("Invalid rank snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Roster file error: {message}")]
    RosterFileError { message: String },
}
