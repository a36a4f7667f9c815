//! Presentation helpers: money, dates and percentages as shown in the shell,
//! plus parsing of the raw strings typed by the user.

use std::fmt::Write;
use std::str::FromStr;

use chrono::{format::StrftimeItems, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracker_domain::EntryKind;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

fn round(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1250.00`, or `-$12.50` for negative values.
pub fn money(amount: Decimal, symbol: &str) -> String {
    let rounded = round(amount, 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// `+$20.00` for income, `-$20.00` for expenses.
pub fn signed_amount(kind: EntryKind, amount: Decimal, symbol: &str) -> String {
    let sign = if kind.is_income() { '+' } else { '-' };
    format!("{}{}{:.2}", sign, symbol, round(amount, 2))
}

/// One decimal place, e.g. `40.0`.
pub fn percentage(value: Decimal) -> String {
    format!("{:.1}", round(value, 1))
}

/// Renders `date` with `format`, or as ISO `YYYY-MM-DD` when the format
/// cannot describe a bare date.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    render_date(date, format).unwrap_or_else(|| date.format(ISO_DATE_FORMAT).to_string())
}

/// Whether `format` is a chrono format string that can render a bare date.
///
/// Time and offset specifiers (`%H`, `%z`, ...) parse fine but fail when a
/// `NaiveDate` is rendered, so the check is a trial render.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.trim().is_empty() {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 31) else {
        return false;
    };
    render_date(sample, format).is_some()
}

fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let items = StrftimeItems::new(format);
    let mut rendered = String::new();
    write!(rendered, "{}", date.format_with_items(items)).ok()?;
    Some(rendered)
}

/// Parses a date typed in the configured format, falling back to ISO `YYYY-MM-DD`.
pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, format)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .ok()
}

/// Parses amounts such as `1250`, `$1,250.00` or `-4.5`.
///
/// Only the number is checked here; positivity is enforced when the entry is built.
pub fn parse_amount(raw: &str, symbol: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = strip_symbol(rest, symbol);
    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return None;
    }
    let value = Decimal::from_str(digits.trim()).ok()?;
    Some(if negative { -value } else { value })
}

fn strip_symbol<'a>(value: &'a str, symbol: &str) -> &'a str {
    if !symbol.is_empty() {
        if let Some(rest) = value.strip_prefix(symbol) {
            return rest.trim_start();
        }
    }
    value.strip_prefix('$').unwrap_or(value).trim_start()
}
