//! Durability layer for solver statistics
//!
//! This crate implements the store manager:
//! - `ensure_header`: create the CSV store with its header, exactly once
//! - `append_row`: append one complete, pre-encoded row
//! - Durability modes: Buffered (default), Strict

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mode;
pub mod store;

// Re-export commonly used types
pub use mode::DurabilityMode;
pub use store::{append_row, ensure_header, CsvStore, DurabilityError, DurabilityResult};
