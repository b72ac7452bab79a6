//! Recorder configuration.
//!
//! [`StatsOptions`] can be built in code:
//!
//! ```
//! use solverstats::{DurabilityMode, StatsOptions};
//!
//! let opts = StatsOptions::new()
//!     .strict_monotonic(true)
//!     .durability(DurabilityMode::Strict);
//! assert!(opts.strict_monotonic);
//! ```
//!
//! or loaded from TOML, where every key is optional:
//!
//! ```toml
//! strict_monotonic = true
//! durability = "strict"
//! log_anchor = "obj"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use solverstats_durability::DurabilityMode;
use std::path::Path;

/// Default substring at which the stored log starts
pub const DEFAULT_LOG_ANCHOR: &str = "obj";

/// Options for recording solver statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsOptions {
    /// Make repaired log times strictly increasing instead of non-decreasing
    pub strict_monotonic: bool,
    /// When appended rows are forced to disk
    pub durability: DurabilityMode,
    /// The stored log starts at the first occurrence of this substring
    pub log_anchor: String,
}

impl StatsOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monotonic-time policy
    pub fn strict_monotonic(mut self, strict: bool) -> Self {
        self.strict_monotonic = strict;
        self
    }

    /// Set the durability mode
    pub fn durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Set the log anchor
    pub fn log_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.log_anchor = anchor.into();
        self
    }

    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let opts: StatsOptions = toml::from_str(text)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject option combinations that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.log_anchor.is_empty() {
            return Err(Error::Config("log_anchor must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            strict_monotonic: false,
            durability: DurabilityMode::Buffered,
            log_anchor: DEFAULT_LOG_ANCHOR.to_string(),
        }
    }
}
