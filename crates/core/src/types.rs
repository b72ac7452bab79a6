//! Core types for solver statistics
//!
//! This module defines the values that flow between the extractor, the
//! row composer and the store:
//! - [`SolverSummary`]: read-only statistics handed over by the solver
//! - [`ProgressSample`]: one point of the bound/objective history
//! - [`Trajectory`]: the time-ordered samples of one parsed log
//! - [`TrajectoryPoint`]: a `(time, bound, objective)` triple

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Statistics reported by the external solver after a run
///
/// The recorder reads it once per call and never takes ownership.
///
/// # Examples
///
/// ```
/// use solverstats_core::SolverSummary;
///
/// let summary = SolverSummary {
///     objective: 1200,
///     user_time_secs: 1.2345,
///     ..Default::default()
/// };
/// assert_eq!(summary.user_time_ms(), 1234);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSummary {
    /// Objective value of the best solution found
    pub objective: i64,
    /// Wall-clock time of the solve, in seconds
    pub wall_time_secs: f64,
    /// User time of the solve, in seconds
    pub user_time_secs: f64,
    /// Number of boolean variables in the model
    pub num_booleans: u64,
    /// Number of search branches
    pub num_branches: u64,
    /// Number of conflicts
    pub num_conflicts: u64,
    /// Serialized solver configuration
    pub parameters: String,
}

impl SolverSummary {
    /// User time in whole milliseconds, truncated toward zero
    ///
    /// Negative or non-finite times map to 0.
    pub fn user_time_ms(&self) -> u64 {
        secs_to_millis(self.user_time_secs)
    }

    /// Wall time in whole milliseconds, truncated toward zero
    pub fn wall_time_ms(&self) -> u64 {
        secs_to_millis(self.wall_time_secs)
    }
}

fn secs_to_millis(secs: f64) -> u64 {
    let ms = (secs * 1000.0).floor();
    if ms.is_finite() && ms > 0.0 {
        ms as u64
    } else {
        0
    }
}

/// A `(time, bound, objective)` triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Elapsed time in milliseconds
    pub time_ms: u64,
    /// Proven lower bound
    pub bound: i64,
    /// Objective of the incumbent
    pub objective: i64,
}

/// One sample of the bound/objective history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    /// Elapsed time in milliseconds
    pub time_ms: u64,
    /// Proven lower bound
    pub bound: i64,
    /// Objective of the incumbent
    pub objective: i64,
    /// `(objective - bound) / objective * 100`
    ///
    /// `None` when the gap is undefined (objective is zero).
    pub gap_percent: Option<f64>,
}

impl ProgressSample {
    /// The sample without its gap
    pub fn point(&self) -> TrajectoryPoint {
        TrajectoryPoint {
            time_ms: self.time_ms,
            bound: self.bound,
            objective: self.objective,
        }
    }
}

/// Time-ordered bound/objective history of one solver log
///
/// A trajectory is produced once per parse and is immutable afterwards.
/// `time_ms` never decreases from one sample to the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<ProgressSample>,
    domain_bound: Option<i64>,
    terminated: bool,
}

impl Trajectory {
    /// An empty trajectory
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a trajectory from parsed samples
    pub fn from_parts(
        samples: Vec<ProgressSample>,
        domain_bound: Option<i64>,
        terminated: bool,
    ) -> Self {
        Self {
            samples,
            domain_bound,
            terminated,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no sample was extracted
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in time order
    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    /// Iterate over the samples in time order
    pub fn iter(&self) -> std::slice::Iter<'_, ProgressSample> {
        self.samples.iter()
    }

    /// First sample
    pub fn first(&self) -> Option<&ProgressSample> {
        self.samples.first()
    }

    /// Final sample
    pub fn last(&self) -> Option<&ProgressSample> {
        self.samples.last()
    }

    /// Objective captured from the first candidate window of the log
    pub fn domain_bound(&self) -> Option<i64> {
        self.domain_bound
    }

    /// True if the log contained a terminal line
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// `(time, bound, objective)` of the final sample
    pub fn final_point(&self) -> Option<TrajectoryPoint> {
        self.last().map(ProgressSample::point)
    }

    /// Column view of the trajectory
    pub fn columns(&self) -> TrajectoryColumns {
        TrajectoryColumns {
            times: self.samples.iter().map(|s| s.time_ms).collect(),
            bounds: self.samples.iter().map(|s| s.bound).collect(),
            objectives: self.samples.iter().map(|s| s.objective).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a ProgressSample;
    type IntoIter = std::slice::Iter<'a, ProgressSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Time, bound and objective sequences of a trajectory, side by side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrajectoryColumns {
    /// Elapsed times in milliseconds
    pub times: Vec<u64>,
    /// Lower bounds
    pub bounds: Vec<i64>,
    /// Objectives
    pub objectives: Vec<i64>,
}

impl TrajectoryColumns {
    /// Fail with [`CoreError::ColumnMismatch`] unless all columns have the
    /// same length
    pub fn check(&self) -> CoreResult<()> {
        if self.times.len() == self.bounds.len() && self.bounds.len() == self.objectives.len() {
            Ok(())
        } else {
            Err(CoreError::ColumnMismatch {
                times: self.times.len(),
                bounds: self.bounds.len(),
                objectives: self.objectives.len(),
            })
        }
    }

    /// Number of rows, once [`check`](Self::check) has passed
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if the columns hold no rows
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
