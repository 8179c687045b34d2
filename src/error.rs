//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use thiserror::Error;

/// Main error type for chronobench operations
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Series generation errors (timestamp arithmetic left the representable range)
    #[error("Generation error at element {index}: {message}")]
    Generation { index: usize, message: String },

    /// Thread pool construction errors
    #[error("Threading error: {message}")]
    Threading { message: String },

    /// Strategy output mismatch (sequential vs. parallel results differ)
    #[error("Verification error: {message}")]
    Verification { message: String },
}

/// Type alias for Results using BenchError
pub type Result<T> = std::result::Result<T, BenchError>;

impl BenchError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a generation error carrying the failing element index
    pub fn generation(index: usize, message: impl Into<String>) -> Self {
        Self::Generation {
            index,
            message: message.into(),
        }
    }

    /// Create a threading error
    pub fn threading(message: impl Into<String>) -> Self {
        Self::Threading {
            message: message.into(),
        }
    }

    /// Create a verification error
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }
}
