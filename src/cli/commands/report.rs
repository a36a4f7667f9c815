use tracker_core::Summary;

use crate::cli::format;
use crate::cli::io;
use crate::cli::output::{self, Tone};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::errors::CommandResult;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "list",
            "Show all records, newest first",
            "list",
            cmd_list,
        )
        .with_alias("3"),
        CommandEntry::new(
            "summary",
            "Show totals, net balance and expense ratio",
            "summary",
            cmd_summary,
        )
        .with_alias("4"),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("ALL BUDGET RECORDS");
    let store = context.store();
    if store.is_empty() {
        io::print_info("No records found. Start by adding some income or expenses!");
        return Ok(());
    }

    let config = context.config();
    io::print_info(format!(
        "{:<12} {:<8} {:>14}  {}",
        "Date", "Type", "Amount", "Description"
    ));
    output::separator();
    for entry in store.sorted_by_date_desc() {
        let tone = if entry.kind().is_income() {
            Tone::Positive
        } else {
            Tone::Negative
        };
        let row = format!(
            "{:<12} {:<8} {:>14}  {}",
            format::format_date(entry.date(), &config.date_format),
            entry.kind(),
            format::signed_amount(entry.kind(), entry.amount(), &config.currency_symbol),
            entry.description()
        );
        output::print_toned(tone, &row);
    }
    output::separator();
    io::print_info(format!("Total Records: {}", store.count()));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = Summary::from_entries(context.store().all());

    output::section("FINANCIAL SUMMARY");
    io::print_info(format!(
        "Total Income:   {:>14}  ({})",
        context.format_money(summary.total_income),
        transactions(summary.income_count)
    ));
    io::print_info(format!(
        "Total Expenses: {:>14}  ({})",
        context.format_money(summary.total_expenses),
        transactions(summary.expense_count)
    ));
    output::separator();

    let balance_line = format!(
        "Net Balance:    {:>14}",
        context.format_money(summary.balance)
    );
    if summary.is_positive() {
        output::print_toned(Tone::Positive, &balance_line);
        io::print_success("You're in the positive!");
    } else {
        output::print_toned(Tone::Negative, &balance_line);
        io::print_warning("Consider reducing expenses.");
    }

    if let Some(ratio) = summary.expense_ratio {
        io::print_info(format!(
            "Expenses are {}% of your income.",
            format::percentage(ratio)
        ));
    }
    Ok(())
}

fn transactions(count: usize) -> String {
    match count {
        1 => "1 transaction".to_string(),
        n => format!("{n} transactions"),
    }
}
