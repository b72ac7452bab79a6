//! Row composition.
//!
//! Merges the solver summary with the trajectory extracted from the progress
//! log into one [`StatsRow`].

use crate::error::Result;
use chrono::NaiveDateTime;
use solverstats_core::{SolverSummary, StatsRow, Trajectory, TrajectoryPoint};
use solverstats_telemetry::extract;

/// Format of the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// Builds statistics rows
#[derive(Debug, Clone)]
pub struct RowComposer {
    strict_monotonic: bool,
    log_anchor: String,
}

impl RowComposer {
    /// Composer with the given monotonic-time policy and log anchor
    pub fn new(strict_monotonic: bool, log_anchor: impl Into<String>) -> Self {
        Self {
            strict_monotonic,
            log_anchor: log_anchor.into(),
        }
    }

    /// Extract the trajectory of `raw_log` and compose the row
    ///
    /// Without a log (absent or empty) the extractor is not run: the
    /// trajectory columns stay at their defaults and the returned trajectory
    /// is empty.
    pub fn compose(
        &self,
        summary: &SolverSummary,
        model_name: &str,
        raw_log: Option<&str>,
        recorded_at: NaiveDateTime,
    ) -> Result<(StatsRow, Trajectory)> {
        let trajectory = match raw_log {
            Some(log) if !log.is_empty() => extract(log, self.strict_monotonic),
            _ => Trajectory::empty(),
        };
        let row = self.compose_row(summary, model_name, &trajectory, raw_log, recorded_at)?;
        Ok((row, trajectory))
    }

    /// Compose the row for an already extracted trajectory
    pub fn compose_row(
        &self,
        summary: &SolverSummary,
        model_name: &str,
        trajectory: &Trajectory,
        raw_log: Option<&str>,
        recorded_at: NaiveDateTime,
    ) -> Result<StatsRow> {
        let mut row = StatsRow {
            recorded_at: recorded_at.format(DATE_FORMAT).to_string(),
            model_name: model_name.to_string(),
            objective: summary.objective,
            user_time_ms: summary.user_time_ms(),
            num_booleans: summary.num_booleans,
            num_branches: summary.num_branches,
            num_conflicts: summary.num_conflicts,
            parameters: summary.parameters.clone(),
            ..Default::default()
        };

        let log = match raw_log {
            Some(log) if !log.is_empty() => log,
            _ => return Ok(row),
        };

        trajectory.columns().check()?;

        row.solver_log = trim_log(log, &self.log_anchor);
        if trajectory.is_empty() {
            // a log without progress lines records zero triples
            row.best_objective_point = Some(TrajectoryPoint::default());
            row.final_point = Some(TrajectoryPoint::default());
        } else {
            row.best_objective_point = first_bound_at_best_objective(trajectory);
            row.final_point = trajectory.final_point();
        }
        Ok(row)
    }
}

impl Default for RowComposer {
    fn default() -> Self {
        Self::new(false, crate::options::DEFAULT_LOG_ANCHOR)
    }
}

/// The sample at which the final objective was first reached
///
/// Among all samples after the first whose objective equals the final
/// objective, returns the earliest. A single-sample trajectory yields that
/// sample.
/// Separates "optimum found early, then proven" from "improved until the
/// end".
pub fn first_bound_at_best_objective(trajectory: &Trajectory) -> Option<TrajectoryPoint> {
    let samples = trajectory.samples();
    let last = samples.last()?;
    // the first sample is only picked when it is the only one
    let earliest = (1..samples.len())
        .find(|&i| samples[i].objective == last.objective)
        .unwrap_or(0);
    Some(samples[earliest].point())
}

/// Log text as stored in the `SolverLog` column
///
/// Starts at the first occurrence of `anchor` (empty if there is none), drops
/// one trailing line break and uses `\r\n` line endings throughout.
pub fn trim_log(log: &str, anchor: &str) -> String {
    let Some(start) = log.find(anchor) else {
        return String::new();
    };
    let tail = &log[start..];
    let tail = tail
        .strip_suffix("\r\n")
        .or_else(|| tail.strip_suffix('\n'))
        .unwrap_or(tail);
    tail.replace("\r\n", "\n").replace('\n', "\r\n")
}
