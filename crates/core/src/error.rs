//! Error types for the data model

use thiserror::Error;

/// Errors raised when a value of the data model breaks one of its invariants.
///
/// These are bugs, not input problems: callers should surface them loudly
/// and never attempt silent recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Time/bound/objective columns of a trajectory differ in length
    #[error("trajectory columns out of step: {times} times, {bounds} bounds, {objectives} objectives")]
    ColumnMismatch {
        /// Length of the time column
        times: usize,
        /// Length of the bound column
        bounds: usize,
        /// Length of the objective column
        objectives: usize,
    },
}

/// Result type for data model checks
pub type CoreResult<T> = std::result::Result<T, CoreError>;
