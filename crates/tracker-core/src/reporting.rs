//! Aggregation helpers for ledger totals, balance and expense ratio.
//!
//! Every function is pure and works on a snapshot slice of entries, usually
//! [`crate::LedgerStore::all`]. Arithmetic saturates at the `Decimal` bounds;
//! with amounts capped at [`tracker_domain::MAX_AMOUNT`] no real ledger gets
//! near them.

use rust_decimal::Decimal;
use tracker_domain::{EntryKind, LedgerEntry};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Sum of amounts for the given kind, zero when there are none.
pub fn total(entries: &[LedgerEntry], kind: EntryKind) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.kind() == kind)
        .map(LedgerEntry::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Income minus expenses.
pub fn balance(entries: &[LedgerEntry]) -> Decimal {
    total(entries, EntryKind::Income).saturating_sub(total(entries, EntryKind::Expense))
}

/// Expenses as a percentage of income.
///
/// Returns `None` only when there is no income to compare against; callers
/// should omit the figure rather than treat it as zero. A share too large for
/// `Decimal` comes back as `Decimal::MAX`.
pub fn expense_ratio(entries: &[LedgerEntry]) -> Option<Decimal> {
    ratio(
        total(entries, EntryKind::Expense),
        total(entries, EntryKind::Income),
    )
}

pub fn count_by_kind(entries: &[LedgerEntry], kind: EntryKind) -> usize {
    entries.iter().filter(|entry| entry.kind() == kind).count()
}

fn ratio(expenses: Decimal, income: Decimal) -> Option<Decimal> {
    if income.is_zero() {
        return None;
    }
    let percent = expenses
        .checked_div(income)
        .map_or(Decimal::MAX, |share| share.saturating_mul(HUNDRED));
    Some(percent)
}

/// Point-in-time figures backing the summary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    pub balance: Decimal,
    pub expense_ratio: Option<Decimal>,
}

impl Summary {
    pub fn from_entries(entries: &[LedgerEntry]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut income_count = 0;
        let mut expense_count = 0;
        for entry in entries {
            match entry.kind() {
                EntryKind::Income => {
                    total_income = total_income.saturating_add(entry.amount());
                    income_count += 1;
                }
                EntryKind::Expense => {
                    total_expenses = total_expenses.saturating_add(entry.amount());
                    expense_count += 1;
                }
            }
        }
        Self {
            total_income,
            total_expenses,
            income_count,
            expense_count,
            balance: total_income.saturating_sub(total_expenses),
            expense_ratio: ratio(total_expenses, total_income),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.income_count + self.expense_count
    }

    pub fn is_positive(&self) -> bool {
        self.balance >= Decimal::ZERO
    }
}
