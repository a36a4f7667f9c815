use rust_decimal::Decimal;
use thiserror::Error;

/// Construction-time failures for [`crate::LedgerEntry`].
///
/// Every variant is an invalid-argument error: the offending entry is never
/// created, so nothing downstream can observe it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Invalid argument: description must not be empty")]
    EmptyDescription,
    #[error("Invalid argument: amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error(
        "Invalid argument: amount must not exceed {max} (got {0})",
        max = crate::entry::MAX_AMOUNT
    )]
    AmountTooLarge(Decimal),
}
