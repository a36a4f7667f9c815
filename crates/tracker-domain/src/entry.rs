//! The ledger entry entity: one income or expense event.

use std::hash::{Hash, Hasher};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{EntryError, EntryKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount: one trillion.
///
/// Keeps ledger totals far from the `Decimal` range, so summing a store can
/// never overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A single financial event recorded in the ledger.
///
/// Entries are entities: two entries are equal iff their ids match,
/// regardless of the remaining fields. Fields are only reachable through
/// accessors so an entry cannot change after construction.
///
/// The PascalCase aliases accept files written by the earlier console
/// tracker; serialization always uses the lowercase names.
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(alias = "Id")]
    id: Uuid,
    #[serde(alias = "Type")]
    kind: EntryKind,
    #[serde(alias = "Description")]
    description: String,
    #[serde(alias = "Amount")]
    amount: Decimal,
    #[serde(alias = "Date", deserialize_with = "deserialize_date")]
    date: NaiveDate,
}

impl LedgerEntry {
    /// Creates a validated entry with a fresh id.
    pub fn new(
        kind: EntryKind,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Self, EntryError> {
        let description = description.into();
        let description = description.trim();
        if description.is_empty() {
            return Err(EntryError::EmptyDescription);
        }
        if amount <= Decimal::ZERO {
            return Err(EntryError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(EntryError::AmountTooLarge(amount));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            description: description.to_string(),
            amount,
            date,
        })
    }

    /// Same as [`LedgerEntry::new`], dated with the current local day.
    pub fn new_with_today(
        kind: EntryKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, EntryError> {
        Self::new(kind, description, amount, today())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Re-checks the construction invariants.
    ///
    /// Entries built through [`LedgerEntry::new`] always pass; deserialized
    /// entries may not, since persisted files can be edited by hand.
    pub fn is_valid(&self) -> bool {
        !self.id.is_nil()
            && !self.description.trim().is_empty()
            && self.amount > Decimal::ZERO
            && self.amount <= MAX_AMOUNT
    }
}

impl PartialEq for LedgerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LedgerEntry {}

impl Hash for LedgerEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    // Legacy files carry a midnight time component: `2024-01-05T00:00:00`.
    let day = raw.split_once('T').map_or(raw.as_str(), |(day, _)| day);
    NaiveDate::parse_from_str(day.trim(), DATE_FORMAT).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn construction_preserves_fields() {
        let entry =
            LedgerEntry::new(EntryKind::Expense, "Groceries", dec!(42.50), date(2024, 3, 9))
                .expect("valid entry");

        assert_eq!(entry.kind(), EntryKind::Expense);
        assert_eq!(entry.description(), "Groceries");
        assert_eq!(entry.amount(), dec!(42.50));
        assert_eq!(entry.date(), date(2024, 3, 9));
        assert!(!entry.id().is_nil());
        assert!(entry.is_valid());
    }

    #[test]
    fn trims_surrounding_whitespace_from_description() {
        let entry = LedgerEntry::new(EntryKind::Income, "  Salary \n", dec!(10), date(2024, 1, 1))
            .unwrap();
        assert_eq!(entry.description(), "Salary");
    }

    #[test]
    fn rejects_blank_descriptions() {
        for description in ["", "   ", "\t\n"] {
            let err = LedgerEntry::new(EntryKind::Income, description, dec!(1), date(2024, 1, 1))
                .unwrap_err();
            assert_eq!(err, EntryError::EmptyDescription);
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in [dec!(0), dec!(0.00), dec!(-5.25)] {
            let err = LedgerEntry::new(EntryKind::Expense, "Rent", amount, date(2024, 1, 1))
                .unwrap_err();
            assert_eq!(err, EntryError::NonPositiveAmount(amount));
        }
    }

    #[test]
    fn caps_amounts_at_one_trillion() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000));
        let at_cap = LedgerEntry::new(EntryKind::Income, "Lottery", MAX_AMOUNT, date(2024, 1, 1));
        assert!(at_cap.is_ok());

        for amount in [dec!(1000000000000.01), Decimal::MAX] {
            let err = LedgerEntry::new(EntryKind::Income, "Lottery", amount, date(2024, 1, 1))
                .unwrap_err();
            assert_eq!(err, EntryError::AmountTooLarge(amount));
        }
    }

    #[test]
    fn today_overload_uses_local_date() {
        let before = today();
        let entry = LedgerEntry::new_with_today(EntryKind::Income, "Gift", dec!(20)).unwrap();
        let after = today();
        assert!(entry.date() == before || entry.date() == after);
    }

    #[test]
    fn equality_is_identity_based() {
        let first = LedgerEntry::new(EntryKind::Income, "Same", dec!(5), date(2024, 1, 1)).unwrap();
        let second =
            LedgerEntry::new(EntryKind::Income, "Same", dec!(5), date(2024, 1, 1)).unwrap();
        assert_ne!(first, second);

        let json = serde_json::to_string(&first).unwrap();
        let copy: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(first, copy);

        let mut set = HashSet::new();
        set.insert(first);
        assert!(set.contains(&copy));
    }

    #[test]
    fn serializes_canonical_field_names() {
        let entry =
            LedgerEntry::new(EntryKind::Income, "Salary", dec!(1000.00), date(2024, 1, 1)).unwrap();
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["kind"], "Income");
        assert_eq!(value["description"], "Salary");
        assert_eq!(value["amount"], "1000.00");
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["id"], entry.id().to_string());
    }

    #[test]
    fn reads_legacy_pascal_case_records() {
        let raw = r#"{
            "Type": 1,
            "Description": "Coffee",
            "Amount": 3.75,
            "Date": "2023-11-02T00:00:00",
            "Id": "5b0c6f4e-3f7c-4f47-9a43-0c1f4f8f2a11"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(raw).expect("legacy record");

        assert_eq!(entry.kind(), EntryKind::Expense);
        assert_eq!(entry.description(), "Coffee");
        assert_eq!(entry.amount(), dec!(3.75));
        assert_eq!(entry.date(), date(2023, 11, 2));
        assert!(entry.is_valid());
    }

    #[test]
    fn is_valid_flags_tampered_records() {
        let raw = r#"{
            "id": "5b0c6f4e-3f7c-4f47-9a43-0c1f4f8f2a11",
            "kind": "Income",
            "description": "  ",
            "amount": "-1",
            "date": "2024-02-02"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(raw).unwrap();
        assert!(!entry.is_valid());
    }

    #[test]
    fn is_valid_flags_out_of_range_amounts() {
        let raw = r#"{
            "id": "5b0c6f4e-3f7c-4f47-9a43-0c1f4f8f2a11",
            "kind": "Income",
            "description": "Windfall",
            "amount": "79228162514264337593543950335",
            "date": "2024-02-02"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(raw).unwrap();
        assert!(!entry.is_valid());
    }
}
