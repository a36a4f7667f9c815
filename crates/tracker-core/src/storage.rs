use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::{CoreError, LedgerStore};

/// Abstraction over persistence backends able to round-trip a [`LedgerStore`].
pub trait LedgerStorage {
    /// Reads the ledger at `path`. Never fails: a missing file yields an empty
    /// store, an unusable one yields an empty store plus a [`LoadWarning`].
    fn load(&self, path: &Path) -> LoadReport;

    /// Overwrites `path` with every entry in `store`.
    fn save(&self, path: &Path, store: &LedgerStore) -> Result<(), CoreError>;
}

/// Where the entries of a [`LoadReport`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// No ledger file existed yet; a normal first run.
    NoPriorFile,
    /// The ledger file was read and parsed successfully.
    File,
    /// The ledger file existed but could not be used.
    Recovered,
}

/// Outcome of [`LedgerStorage::load`].
#[derive(Debug)]
pub struct LoadReport {
    pub store: LedgerStore,
    pub origin: LoadOrigin,
    pub warning: Option<LoadWarning>,
}

impl LoadReport {
    pub fn fresh() -> Self {
        Self {
            store: LedgerStore::new(),
            origin: LoadOrigin::NoPriorFile,
            warning: None,
        }
    }

    pub fn loaded(store: LedgerStore) -> Self {
        Self {
            store,
            origin: LoadOrigin::File,
            warning: None,
        }
    }

    pub fn recovered(warning: LoadWarning) -> Self {
        Self {
            store: LedgerStore::new(),
            origin: LoadOrigin::Recovered,
            warning: Some(warning),
        }
    }
}

/// Signals that a persisted ledger existed but had to be discarded.
#[derive(Debug, Error)]
#[error("Could not load {}: {reason}", .path.display())]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: LoadWarningReason,
    /// Copy of the discarded file kept aside, when one could be made.
    pub preserved_copy: Option<PathBuf>,
}

impl LoadWarning {
    pub fn new(path: impl Into<PathBuf>, reason: LoadWarningReason) -> Self {
        Self {
            path: path.into(),
            reason,
            preserved_copy: None,
        }
    }

    pub fn with_preserved_copy(mut self, copy: PathBuf) -> Self {
        self.preserved_copy = Some(copy);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarningReason {
    #[error("file is empty")]
    Empty,
    #[error("file could not be read ({0})")]
    Unreadable(String),
    #[error("file is not a valid ledger ({0})")]
    Malformed(String),
    #[error("entry {0} failed validation")]
    InvalidEntry(Uuid),
    #[error("entry id {0} appears more than once")]
    DuplicateEntry(Uuid),
}
