//! SolverStats Integration Tests
//!
//! End-to-end tests of the recorder: store lifecycle, append semantics,
//! trajectory extraction and row composition.

mod append;
mod extraction;
mod header;
mod scenario;

use chrono::{NaiveDate, NaiveDateTime};
use solverstats::SolverSummary;

/// Fixed `Date` column value for deterministic rows
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 21)
        .unwrap()
        .and_hms_opt(14, 5, 0)
        .unwrap()
}

/// Summary of a small circle-packing solve
pub fn circles_summary() -> SolverSummary {
    SolverSummary {
        objective: 26,
        wall_time_secs: 2.1,
        user_time_secs: 2.0456,
        num_booleans: 1_250,
        num_branches: 48_213,
        num_conflicts: 7_902,
        parameters: "max_time_in_seconds: 60\nnum_workers: 8\nlog_search_progress: true".to_string(),
    }
}

/// Progress log with a solver banner, three progress lines and a trailer
pub const SCENARIO_LOG: &str = "\
Starting CP-SAT solver v9.9
Parameters: max_time_in_seconds: 60
Initial optimization model '': (model_fingerprint: 0x1a2b)
objective: minimize sum(border)
#1 0.50s next:[10,20]
#2 1.20s next:[15,25]
#Done 2.00s next:[]
CpSolverResponse summary:
status: OPTIMAL
";
