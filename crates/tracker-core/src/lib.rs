//! tracker-core
//!
//! Ledger store, reporting and the persistence contract for the budget tracker.
//! Depends on tracker-domain. No CLI, no terminal I/O, no direct file access.

pub mod error;
pub mod reporting;
pub mod storage;
pub mod store;

pub use error::CoreError;
pub use reporting::Summary;
pub use storage::{LedgerStorage, LoadOrigin, LoadReport, LoadWarning, LoadWarningReason};
pub use store::LedgerStore;
pub use tracker_domain::{EntryError, EntryKind, LedgerEntry};
