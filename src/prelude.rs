//! Convenient imports for SolverStats.
//!
//! ```no_run
//! use solverstats::prelude::*;
//!
//! let stats = SolverStats::open("runs.csv")?;
//! stats.write_stats(&SolverSummary::default(), "model", None)?;
//! # Ok::<(), solverstats::Error>(())
//! ```

// Main entry point
pub use crate::stats::{SolverStats, SolverStatsBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Configuration
pub use crate::options::StatsOptions;
pub use solverstats_durability::DurabilityMode;

// Data model
pub use solverstats_core::{ProgressSample, SolverSummary, Trajectory, TrajectoryPoint};
