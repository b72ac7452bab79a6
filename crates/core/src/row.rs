//! The persisted statistics record

use crate::types::TrajectoryPoint;
use serde::{Deserialize, Serialize};

/// One data row of the statistics store
///
/// A row is created fresh for every recorded solve, written once and never
/// mutated afterwards. The two trajectory-derived triples stay `None` when no
/// progress log was supplied, and hold zeros when the log had no progress
/// lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Wall-clock time of the write, `YYYY-MM-DD_HH-MM`
    pub recorded_at: String,
    /// Name of the solved model
    pub model_name: String,
    /// Objective value reported by the solver
    pub objective: i64,
    /// User time in milliseconds
    pub user_time_ms: u64,
    /// Number of boolean variables
    pub num_booleans: u64,
    /// Number of search branches
    pub num_branches: u64,
    /// Number of conflicts
    pub num_conflicts: u64,
    /// Serialized solver configuration
    pub parameters: String,
    /// Progress log, trimmed and with CRLF line endings
    pub solver_log: String,
    /// Earliest sample after the first one that reached the final objective
    pub best_objective_point: Option<TrajectoryPoint>,
    /// Final sample
    pub final_point: Option<TrajectoryPoint>,
}

impl StatsRow {
    /// True if the row carries trajectory-derived columns
    pub fn has_trajectory(&self) -> bool {
        self.best_objective_point.is_some() || self.final_point.is_some()
    }
}
