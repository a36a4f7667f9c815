use chrono::NaiveDate;
use tracing::debug;
use tracker_domain::{today, EntryKind, LedgerEntry};

use crate::cli::format;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::errors::{CommandError, CommandResult};

const INCOME_USAGE: &str = "income [description] [amount] [date]";
const EXPENSE_USAGE: &str = "expense [description] [amount] [date]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Add an income record", INCOME_USAGE, cmd_income)
            .with_alias("1"),
        CommandEntry::new(
            "expense",
            "Add an expense record",
            EXPENSE_USAGE,
            cmd_expense,
        )
        .with_alias("2"),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add_entry(context, EntryKind::Income, args, INCOME_USAGE)
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add_entry(context, EntryKind::Expense, args, EXPENSE_USAGE)
}

fn add_entry(
    context: &mut ShellContext,
    kind: EntryKind,
    args: &[&str],
    usage: &str,
) -> CommandResult {
    if args.len() > 3 {
        return Err(CommandError::InvalidArguments(format!(
            "Too many arguments. Quote descriptions with spaces. Usage: {usage}"
        )));
    }

    let description = match args.first() {
        Some(value) => value.to_string(),
        None => context.prompt_value("Description", usage)?,
    };
    let raw_amount = match args.get(1) {
        Some(value) => value.to_string(),
        None => context.prompt_value("Amount", usage)?,
    };
    let amount = format::parse_amount(&raw_amount, &context.config().currency_symbol)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "`{}` is not a valid amount.",
                raw_amount.trim()
            ))
        })?;

    // The date is only prompted for in the fully interactive form.
    let raw_date = match args.get(2) {
        Some(value) => Some(value.to_string()),
        None if args.is_empty() => {
            let example = format::format_date(today(), &context.config().date_format);
            context.prompt_optional(&format!("Date (e.g. {example}, blank for today)"))?
        }
        None => None,
    };
    let date = resolve_date(raw_date.as_deref(), &context.config().date_format);

    let entry = LedgerEntry::new(kind, description, amount, date)?;
    let confirmation = format!(
        "{} added successfully! {} - {}",
        kind,
        context.format_money(entry.amount()),
        entry.description()
    );
    let id = context.add_entry(entry);
    debug!(%id, %kind, "entry added");
    io::print_success(confirmation);
    Ok(())
}

fn resolve_date(raw: Option<&str>, date_format: &str) -> NaiveDate {
    match raw.map(str::trim) {
        None | Some("") => today(),
        Some(value) => format::parse_date(value, date_format).unwrap_or_else(|| {
            io::print_warning("Invalid date format. Using today's date.");
            today()
        }),
    }
}
