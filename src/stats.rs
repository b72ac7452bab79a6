//! Main entry point for SolverStats.
//!
//! This module provides the [`SolverStats`] recorder, which ties the log
//! extractor, the row composer and the CSV store together.

use crate::composer::RowComposer;
use crate::error::{Error, Result};
use crate::options::StatsOptions;
use chrono::{Local, NaiveDateTime};
use solverstats_core::{SolverSummary, Trajectory};
use solverstats_durability::{CsvStore, DurabilityMode};
use std::path::{Path, PathBuf};
use tracing::info;

/// Create the store at `path` with its header if it does not exist yet.
///
/// Idempotent: returns `true` only for the call that wrote the header.
pub fn ensure_header(path: impl AsRef<Path>) -> Result<bool> {
    Ok(solverstats_durability::ensure_header(path)?)
}

/// Recorder for solver statistics.
///
/// Each [`write_stats`](SolverStats::write_stats) call appends exactly one row
/// to the CSV store and returns the trajectory parsed from the progress log.
///
/// # Example
///
/// ```no_run
/// use solverstats::{SolverStats, SolverSummary};
///
/// let stats = SolverStats::open("runs.csv")?;
/// let summary = SolverSummary { objective: 26, ..Default::default() };
///
/// let log = "#1 0.50s next:[10,20]\n#Done 1.00s next:[]\n";
/// let trajectory = stats.write_stats(&summary, "circles-5x5", Some(log))?;
/// println!("{} samples", trajectory.len());
/// # Ok::<(), solverstats::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolverStats {
    store: CsvStore,
    options: StatsOptions,
}

impl SolverStats {
    /// Recorder for the store at `path` with default options.
    ///
    /// No file is touched until the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Recorder for the store at `path` with explicit options.
    pub fn with_options(path: impl AsRef<Path>, options: StatsOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            store: CsvStore::with_mode(path.as_ref(), options.durability),
            options,
        })
    }

    /// Create a builder for recorder configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use solverstats::SolverStats;
    ///
    /// let stats = SolverStats::builder()
    ///     .path("runs.csv")
    ///     .strict_monotonic(true)
    ///     .strict()
    ///     .open()?;
    /// # Ok::<(), solverstats::Error>(())
    /// ```
    pub fn builder() -> SolverStatsBuilder {
        SolverStatsBuilder::new()
    }

    /// Store path.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Current options.
    pub fn options(&self) -> &StatsOptions {
        &self.options
    }

    /// The underlying store.
    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    /// Whether repaired log times are strictly increasing.
    pub fn strict_monotonic(&self) -> bool {
        self.options.strict_monotonic
    }

    /// Switch the monotonic-time policy for later writes.
    pub fn set_strict_monotonic(&mut self, strict: bool) {
        self.options.strict_monotonic = strict;
    }

    /// Create the store with its header if it does not exist yet.
    pub fn ensure_header(&self) -> Result<bool> {
        Ok(self.store.ensure_header()?)
    }

    /// Record one solve.
    ///
    /// Ensures the header, parses `log_text` (if any), composes the row and
    /// appends it. Returns the parsed trajectory, empty when no log was
    /// given. A failed write aborts the call without persisting a partial
    /// row.
    pub fn write_stats(
        &self,
        summary: &SolverSummary,
        model_name: &str,
        log_text: Option<&str>,
    ) -> Result<Trajectory> {
        self.write_stats_at(summary, model_name, log_text, Local::now().naive_local())
    }

    /// Record one solve with an explicit `Date` column value.
    pub fn write_stats_at(
        &self,
        summary: &SolverSummary,
        model_name: &str,
        log_text: Option<&str>,
        recorded_at: NaiveDateTime,
    ) -> Result<Trajectory> {
        self.store.ensure_header()?;

        let composer = RowComposer::new(self.options.strict_monotonic, &*self.options.log_anchor);
        let (row, trajectory) = composer.compose(summary, model_name, log_text, recorded_at)?;

        self.store.append_row(&row)?;
        info!(
            "Recorded {} (objective {}, {} samples) to {}",
            model_name,
            summary.objective,
            trajectory.len(),
            self.store.path().display()
        );
        Ok(trajectory)
    }

    /// Read back all data rows of the store.
    pub fn rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.store.read_rows()?)
    }
}

/// Builder for recorder configuration.
#[derive(Debug, Clone, Default)]
pub struct SolverStatsBuilder {
    path: Option<PathBuf>,
    options: StatsOptions,
}

impl SolverStatsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: StatsOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the monotonic-time policy.
    pub fn strict_monotonic(mut self, strict: bool) -> Self {
        self.options.strict_monotonic = strict;
        self
    }

    /// Set the durability mode.
    pub fn durability(mut self, mode: DurabilityMode) -> Self {
        self.options.durability = mode;
        self
    }

    /// Use buffered mode (default).
    pub fn buffered(self) -> Self {
        self.durability(DurabilityMode::Buffered)
    }

    /// Use strict mode: sync to disk after every write.
    pub fn strict(self) -> Self {
        self.durability(DurabilityMode::Strict)
    }

    /// Set the substring at which the stored log starts.
    pub fn log_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.options.log_anchor = anchor.into();
        self
    }

    /// Build the recorder.
    pub fn open(self) -> Result<SolverStats> {
        let path = self
            .path
            .ok_or_else(|| Error::Config("no store path set".to_string()))?;
        SolverStats::with_options(path, self.options)
    }
}
