//! Telemetry errors

use thiserror::Error;

/// Errors raised while deriving telemetry values
///
/// Malformed log tokens are not errors: the log is free-form text and
/// unrecognized words are skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The gap divides by the objective, which is zero
    #[error("optimality gap undefined for bound {bound} and objective {objective}")]
    UndefinedGap {
        /// Lower bound
        bound: i64,
        /// Objective
        objective: i64,
    },
}
