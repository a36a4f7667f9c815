//! tracker-domain
//!
//! Pure domain models for the budget tracker (ledger entries and their kinds).
//! No I/O, no CLI, no storage. Only data types, validation and core enums.

pub mod entry;
pub mod error;
pub mod kind;

pub use entry::{today, LedgerEntry, MAX_AMOUNT};
pub use error::EntryError;
pub use kind::{EntryKind, ParseKindError};
