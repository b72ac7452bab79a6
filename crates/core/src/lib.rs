//! Core types for solver statistics
//!
//! This crate defines the data model shared by every other crate:
//! - [`SolverSummary`]: statistics reported by the external solver
//! - [`ProgressSample`] / [`Trajectory`]: the bound/objective history
//!   reconstructed from a solver progress log
//! - [`StatsRow`]: one persisted record of the CSV store
//! - [`CoreError`]: invariant violations detected on the data model

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod row;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use row::StatsRow;
pub use types::{ProgressSample, SolverSummary, Trajectory, TrajectoryColumns, TrajectoryPoint};
