//! tracker-storage-json
//!
//! Filesystem-backed JSON persistence for the ledger store.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::{debug, info, warn};
use tracker_core::{
    CoreError, LedgerStorage, LedgerStore, LoadReport, LoadWarning, LoadWarningReason,
};
use tracker_domain::LedgerEntry;

/// File name used when no custom ledger location is configured.
pub const DEFAULT_FILE_NAME: &str = "budget.json";

const LEDGER_EXTENSION: &str = "json";
const CORRUPT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";

/// JSON persistence for a single ledger file.
///
/// Unusable files are copied aside before an empty store is handed back, so
/// the next save cannot destroy the only copy of hand-edited data.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    preserve_corrupt: bool,
}

impl Default for JsonLedgerStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLedgerStorage {
    pub fn new() -> Self {
        Self {
            preserve_corrupt: true,
        }
    }

    /// Storage that leaves unusable files untouched instead of copying them aside.
    pub fn without_preservation() -> Self {
        Self {
            preserve_corrupt: false,
        }
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn load(&self, path: &Path) -> LoadReport {
        match read_store(path) {
            Ok(None) => {
                debug!(path = %path.display(), "no ledger file yet, starting empty");
                LoadReport::fresh()
            }
            Ok(Some(store)) => {
                info!(path = %path.display(), entries = store.count(), "ledger loaded");
                LoadReport::loaded(store)
            }
            Err(reason) => {
                let mut warning = LoadWarning::new(path, reason);
                if self.preserve_corrupt {
                    match preserve_copy(path) {
                        Ok(copy) => warning = warning.with_preserved_copy(copy),
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "could not copy unusable ledger aside")
                        }
                    }
                }
                warn!(%warning, "starting with an empty ledger");
                LoadReport::recovered(warning)
            }
        }
    }

    fn save(&self, path: &Path, store: &LedgerStore) -> Result<(), CoreError> {
        save_store_to_path(store, path)
    }
}

/// Saves every entry of `store` to `path`, staging through a temporary file.
pub fn save_store_to_path(store: &LedgerStore, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| CoreError::persistence(parent, err))?;
        }
    }
    let json = serialize_entries(store.all())?;
    let tmp = tmp_path(path);
    let staged = write_atomic(&tmp, &json)
        .map_err(|err| CoreError::persistence(&tmp, err))
        .and_then(|()| fs::rename(&tmp, path).map_err(|err| CoreError::persistence(path, err)));
    if let Err(err) = staged {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    info!(path = %path.display(), entries = store.count(), "ledger saved");
    Ok(())
}

/// Loads a ledger from `path` without copying unusable files aside.
pub fn load_store_from_path(path: &Path) -> LoadReport {
    JsonLedgerStorage::without_preservation().load(path)
}

/// `Ok(None)` means there is no file at `path`.
fn read_store(path: &Path) -> Result<Option<LedgerStore>, LoadWarningReason> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LoadWarningReason::Unreadable(err.to_string())),
    };
    if data.trim().is_empty() {
        return Err(LoadWarningReason::Empty);
    }
    let entries: Vec<LedgerEntry> = serde_json::from_str(&data)
        .map_err(|err| LoadWarningReason::Malformed(err.to_string()))?;
    if let Some(invalid) = entries.iter().find(|entry| !entry.is_valid()) {
        return Err(LoadWarningReason::InvalidEntry(invalid.id()));
    }
    LedgerStore::from_entries(entries)
        .map(Some)
        .map_err(|err| match err {
            CoreError::DuplicateEntry(id) => LoadWarningReason::DuplicateEntry(id),
            other => LoadWarningReason::Malformed(other.to_string()),
        })
}

fn preserve_copy(path: &Path) -> io::Result<PathBuf> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("ledger");
    let timestamp = Local::now().format(CORRUPT_TIMESTAMP_FORMAT).to_string();
    let copy = (0u32..)
        .map(|attempt| {
            let name = match attempt {
                0 => format!("{stem}.corrupt-{timestamp}.{LEDGER_EXTENSION}"),
                n => format!("{stem}.corrupt-{timestamp}-{n}.{LEDGER_EXTENSION}"),
            };
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.with_extension("corrupt"));
    fs::copy(path, &copy)?;
    Ok(copy)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

fn serialize_entries(entries: &[LedgerEntry]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(entries).map_err(|err| CoreError::Serde(err.to_string()))
}
