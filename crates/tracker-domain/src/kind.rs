use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    pub fn is_income(self) -> bool {
        matches!(self, EntryKind::Income)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry kind `{0}` (expected income or expense)")]
pub struct ParseKindError(pub String);

impl FromStr for EntryKind {
    type Err = ParseKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

// Older ledger files store the kind as a numeric index (0 = income, 1 = expense).
impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawKind {
            Name(String),
            Index(u64),
        }

        match RawKind::deserialize(deserializer)? {
            RawKind::Name(name) => name.parse().map_err(de::Error::custom),
            RawKind::Index(0) => Ok(EntryKind::Income),
            RawKind::Index(1) => Ok(EntryKind::Expense),
            RawKind::Index(other) => Err(de::Error::custom(format!(
                "unknown entry kind index {other}"
            ))),
        }
    }
}
