//! Durability mode for store writes.
//!
//! Defines when appended rows are forced to disk.

use serde::{Deserialize, Serialize};

/// Durability mode for store writes.
///
/// # Mode Comparison
///
/// | Mode | Flush | Use Case |
/// |------|-------|----------|
/// | Buffered | OS decides | Interactive runs, benchmarks |
/// | Strict | `sync_data` after every write | Long campaigns where a crash must not lose rows |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// Leave flushing to the operating system.
    ///
    /// A crash right after a write may lose the last rows.
    #[default]
    Buffered,

    /// `sync_data` after the header and after every appended row.
    Strict,
}

impl DurabilityMode {
    /// Check if this mode requires an fsync after every write.
    pub fn requires_sync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::Buffered => "Buffered writes (OS flushes)",
            DurabilityMode::Strict => "Sync after every write (safest, slowest)",
        }
    }
}
