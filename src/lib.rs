//! # SolverStats
//!
//! Solver progress-log telemetry with a durable CSV store.
//!
//! SolverStats takes the summary statistics of a finished solve plus the
//! free-form progress log the solver printed, reconstructs the time-ordered
//! bound/objective trajectory from the log, and appends one summary row to a
//! CSV file that is created with its header on first use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use solverstats::prelude::*;
//!
//! let stats = SolverStats::open("runs.csv")?;
//! let summary = SolverSummary {
//!     objective: 26,
//!     user_time_secs: 2.0,
//!     ..Default::default()
//! };
//!
//! let log = "#1 0.50s next:[10,20]\n#2 1.20s next:[15,25]\n#Done 2.00s next:[]\n";
//! let trajectory = stats.write_stats(&summary, "circles", Some(log))?;
//! for sample in &trajectory {
//!     println!("{} ms: {}..{}", sample.time_ms, sample.bound, sample.objective);
//! }
//! # Ok::<(), solverstats::Error>(())
//! ```
//!
//! ## Components
//!
//! - [`SolverStats`] - recorder facade (`ensure_header`, `write_stats`)
//! - [`RowComposer`] - merges summary and trajectory into a [`StatsRow`]
//! - [`extract`] - progress-log trajectory extractor
//! - [`CsvStore`] - append-only CSV store

#![warn(missing_docs)]

mod composer;
mod error;
mod options;
mod stats;

pub mod prelude;

// Re-export main entry points
pub use stats::{ensure_header, SolverStats, SolverStatsBuilder};
pub use error::{Error, Result};
pub use options::{StatsOptions, DEFAULT_LOG_ANCHOR};
pub use composer::{first_bound_at_best_objective, trim_log, RowComposer, DATE_FORMAT};

// Re-export workspace types
pub use solverstats_core::{
    ProgressSample, SolverSummary, StatsRow, Trajectory, TrajectoryColumns, TrajectoryPoint,
};
pub use solverstats_durability::{CsvStore, DurabilityMode};
pub use solverstats_telemetry::{extract, optimality_gap, TrajectoryParser};
pub use solverstats_wire::HEADER;
