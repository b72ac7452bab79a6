//! Unified error types for SolverStats.
//!
//! This module provides a clean error type that wraps the errors of the
//! workspace crates and presents a consistent interface to users.

use solverstats_core::CoreError;
use solverstats_durability::DurabilityError;
use thiserror::Error;

/// All SolverStats errors.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while creating, opening or writing the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store content or lifecycle error
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for SolverStats operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an I/O error.
    ///
    /// I/O errors are never retried internally; the caller owns the retry
    /// policy.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

// Convert from store errors
impl From<DurabilityError> for Error {
    fn from(e: DurabilityError) -> Self {
        match e {
            DurabilityError::Io(io_err) => Error::Io(io_err),
            other => Error::Storage(other.to_string()),
        }
    }
}

// Convert from data model invariant violations
impl From<CoreError> for Error {
    fn from(e: CoreError) -> Self {
        Error::Internal(e.to_string())
    }
}

// Convert from TOML configuration errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
