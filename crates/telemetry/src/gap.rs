//! Optimality gap

use crate::error::TelemetryError;

/// Relative distance between the incumbent objective and the lower bound,
/// in percent: `(objective - bound) / objective * 100`.
///
/// The gap is taken relative to the objective, not to the bound. It is
/// undefined when `objective == 0`.
///
/// # Examples
///
/// ```
/// use solverstats_telemetry::optimality_gap;
///
/// let gap = optimality_gap(15, 26).unwrap();
/// assert!((gap - 42.307).abs() < 1e-3);
/// assert!(optimality_gap(3, 0).is_err());
/// ```
pub fn optimality_gap(bound: i64, objective: i64) -> Result<f64, TelemetryError> {
    if objective == 0 {
        return Err(TelemetryError::UndefinedGap { bound, objective });
    }
    let objective_f = objective as f64;
    Ok((objective_f - bound as f64) / objective_f * 100.0)
}
