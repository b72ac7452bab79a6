//! Append-only CSV store
//!
//! The store is a single CSV file whose lifecycle is:
//! 1. created together with its header on the first write
//! 2. appended to, one complete record per write, ever after
//!
//! Existence is checked on every call; nothing about the file is cached.
//! Rows are encoded in memory and handed to the OS in a single `write_all`,
//! so a failed write never leaves a half-encoded row behind.
//!
//! Concurrent writers from different processes are not coordinated.

use crate::mode::DurabilityMode;
use solverstats_core::StatsRow;
use solverstats_wire::{decode_records, encode_header, encode_row, DecodeError, HEADER};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

// ============================================================================
// Errors
// ============================================================================

/// Store errors
#[derive(Debug, Error)]
pub enum DurabilityError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row was appended before the store file existed
    #[error("Store {0} does not exist; write the header first")]
    MissingStore(PathBuf),

    /// The first record of the file is not the expected header
    #[error("Store {path} has an unexpected header: {found:?}")]
    SchemaMismatch {
        /// Store path
        path: PathBuf,
        /// Header fields found in the file
        found: Vec<String>,
    },

    /// Stored text is not valid CSV
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type for store operations
pub type DurabilityResult<T> = std::result::Result<T, DurabilityError>;

// ============================================================================
// Free functions
// ============================================================================

/// Create the store at `path` with its header if no file exists there
///
/// Returns `true` if the header was written by this call. Calling it on an
/// existing file is a no-op: the file is never truncated and the header is
/// never duplicated.
pub fn ensure_header(path: impl AsRef<Path>) -> DurabilityResult<bool> {
    CsvStore::new(path.as_ref()).ensure_header()
}

/// Append one row to the store at `path`
pub fn append_row(path: impl AsRef<Path>, row: &StatsRow) -> DurabilityResult<()> {
    CsvStore::new(path.as_ref()).append_row(row)
}

// ============================================================================
// CsvStore
// ============================================================================

/// Handle to a statistics store on disk
///
/// The handle only remembers the path and the durability mode; it holds no
/// open file between calls.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    mode: DurabilityMode,
}

impl CsvStore {
    /// Handle for the store at `path` with the default durability mode
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_mode(path, DurabilityMode::default())
    }

    /// Handle for the store at `path` with an explicit durability mode
    pub fn with_mode(path: impl Into<PathBuf>, mode: DurabilityMode) -> Self {
        CsvStore {
            path: path.into(),
            mode,
        }
    }

    /// Store path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durability mode
    pub fn mode(&self) -> DurabilityMode {
        self.mode
    }

    /// True if the store file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with its header if it does not exist yet
    ///
    /// Returns `true` if the header was written by this call.
    pub fn ensure_header(&self) -> DurabilityResult<bool> {
        if self.path.exists() {
            trace!("Store {} already exists", self.path.display());
            return Ok(false);
        }

        // create_new: a concurrent creator wins and we leave its file alone
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        let written = file
            .write_all(encode_header().as_bytes())
            .map_err(DurabilityError::from)
            .and_then(|()| self.sync(&file));
        drop(file);
        self.finish_create(written)
    }

    /// Append one encoded row
    ///
    /// Fails with [`DurabilityError::MissingStore`] if the file does not
    /// exist, so that no data row can precede the header.
    pub fn append_row(&self, row: &StatsRow) -> DurabilityResult<()> {
        let line = encode_row(row);

        let mut file = match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DurabilityError::MissingStore(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(line.as_bytes())?;
        self.sync(&file)?;
        trace!(
            "Appended {} bytes for model {} to {}",
            line.len(),
            row.model_name,
            self.path.display()
        );
        Ok(())
    }

    /// Read back all data rows, header excluded
    ///
    /// The header must match the expected column layout.
    pub fn read_rows(&self) -> DurabilityResult<Vec<Vec<String>>> {
        let text = std::fs::read_to_string(&self.path)?;
        let mut records = decode_records(&text)?.into_iter();

        match records.next() {
            Some(header) if header.iter().map(String::as_str).eq(HEADER.iter().copied()) => {
                Ok(records.collect())
            }
            found => Err(DurabilityError::SchemaMismatch {
                path: self.path.clone(),
                found: found.unwrap_or_default(),
            }),
        }
    }

    /// Number of data rows in the store
    pub fn row_count(&self) -> DurabilityResult<usize> {
        Ok(self.read_rows()?.len())
    }

    /// Keep a freshly created file only if its header made it to disk
    fn finish_create(&self, written: DurabilityResult<()>) -> DurabilityResult<bool> {
        if let Err(e) = written {
            // a headerless file would be taken for an initialized store
            if let Err(remove_err) = fs::remove_file(&self.path) {
                warn!(
                    "Failed to remove incomplete store {}: {}",
                    self.path.display(),
                    remove_err
                );
            }
            return Err(e);
        }
        debug!("Created statistics store {}", self.path.display());
        Ok(true)
    }

    fn sync(&self, file: &File) -> DurabilityResult<()> {
        if self.mode.requires_sync() {
            file.sync_data()?;
        }
        Ok(())
    }
}
