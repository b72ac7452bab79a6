//! Solver progress-log telemetry
//!
//! Reconstructs the bound/objective history of a solve from the free-form
//! progress log printed by the solver. Progress lines look like:
//!
//! ```text
//! #1       0.50s best:20    next:[10,20]    fixed_bools:0/120
//! #Bound   0.91s best:20    next:[12,20]    max_lp
//! #Done    2.00s next:[]
//! ```
//!
//! - [`classify`]: word tokens and the per-line state machine
//! - [`parser`]: [`TrajectoryParser`] and the [`extract`] entry point
//! - [`gap`]: optimality gap with an explicit undefined case
//!
//! ## Example
//!
//! ```
//! use solverstats_telemetry::extract;
//!
//! let log = "#1 0.50s next:[10,20]\n#Done 1.00s next:[]\n";
//! let trajectory = extract(log, false);
//! assert_eq!(trajectory.len(), 2);
//! assert_eq!(trajectory.last().unwrap().objective, 21);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod error;
pub mod gap;
pub mod parser;

pub use classify::{classify_word, LineState, Token};
pub use error::TelemetryError;
pub use gap::optimality_gap;
pub use parser::{extract, repair_time, LineOutcome, TrajectoryParser};
