use std::fs;
use std::path::Path;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn run_script(home: &Path, input: &str) -> Assert {
    let mut cmd = Command::cargo_bin("budget_tracker").unwrap();
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home)
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string())
        .assert()
}

fn stdout_of(assert: Assert) -> String {
    String::from_utf8_lossy(&assert.success().get_output().stdout).into_owned()
}

#[test]
fn records_entries_and_prints_summary() {
    let home = TempDir::new().unwrap();
    let input = "income Salary 1000 2024-01-01\n\
                 expense Rent 250 01/05/2024\n\
                 expense Food $150.00 01/05/2024\n\
                 summary\n\
                 exit\n";

    run_script(home.path(), input)
        .success()
        .stdout(contains("Income added successfully! $1000.00 - Salary"))
        .stdout(contains("Total Income:"))
        .stdout(contains("$400.00"))
        .stdout(contains("$600.00"))
        .stdout(contains("You're in the positive!"))
        .stdout(contains("Expenses are 40.0% of your income."))
        .stdout(contains("Thanks for using Budget Tracker. Goodbye!"));

    let json = fs::read_to_string(home.path().join("budget.json")).unwrap();
    assert!(json.contains("\"Salary\""));
    assert!(json.contains("\"Expense\""));
}

#[test]
fn list_shows_newest_first() {
    let home = TempDir::new().unwrap();
    let input = "income Salary 1000 2024-01-01\n\
                 expense Rent 250 2024-01-05\n\
                 expense Food 150 2024-01-05\n\
                 list\n\
                 exit\n";

    let stdout = stdout_of(run_script(home.path(), input));
    let listing = &stdout[stdout.find("ALL BUDGET RECORDS").unwrap()..];

    let rent = listing.find("-$250.00").unwrap();
    let food = listing.find("-$150.00").unwrap();
    let salary = listing.find("+$1000.00").unwrap();
    assert!(rent < food && food < salary, "{listing}");
    assert!(listing.contains("01/05/2024"));
    assert!(listing.contains("Total Records: 3"));
}

#[test]
fn entries_survive_a_restart() {
    let home = TempDir::new().unwrap();
    run_script(
        home.path(),
        "income \"Freelance work\" 320.50 2024-02-10\nexit\n",
    )
    .success();

    run_script(home.path(), "list\nexit\n")
        .success()
        .stdout(contains("Loaded 1 existing records"))
        .stdout(contains("Freelance work"))
        .stdout(contains("Total Records: 1"));
}

#[test]
fn end_of_input_saves_like_exit() {
    let home = TempDir::new().unwrap();

    run_script(home.path(), "expense Coffee 3.50\n")
        .success()
        .stdout(contains("Data saved to"));

    let json = fs::read_to_string(home.path().join("budget.json")).unwrap();
    assert!(json.contains("\"Coffee\""));
}

#[test]
fn corrupt_ledger_starts_fresh_and_keeps_a_copy() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("budget.json"), "{ this is not a ledger").unwrap();

    run_script(home.path(), "list\nexit\n")
        .success()
        .stdout(contains("Starting fresh."))
        .stdout(contains("No records found."));

    let copies: Vec<String> = fs::read_dir(home.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("budget.corrupt-"))
        .collect();
    assert_eq!(copies.len(), 1, "{copies:?}");
    let preserved = fs::read_to_string(home.path().join(&copies[0])).unwrap();
    assert_eq!(preserved, "{ this is not a ledger");
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = TempDir::new().unwrap();

    run_script(home.path(), "sumary\nexit\n")
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn script_mode_reports_missing_and_invalid_values() {
    let home = TempDir::new().unwrap();
    let input = "income Salary\n\
                 expense Rent -5\n\
                 expense \"  \" 10\n\
                 list\n\
                 exit\n";

    run_script(home.path(), input)
        .success()
        .stdout(contains("Missing amount"))
        .stdout(contains("Invalid argument: amount must be greater than zero"))
        .stdout(contains("Invalid argument: description must not be empty"))
        .stdout(contains("No records found."));
}

#[test]
fn summary_without_income_omits_the_ratio() {
    let home = TempDir::new().unwrap();

    run_script(home.path(), "2 Groceries 80 2024-03-01\n4\n5\n")
        .success()
        .stdout(contains("Net Balance:"))
        .stdout(contains("-$80.00"))
        .stdout(contains("Consider reducing expenses."))
        .stdout(contains("Expenses are").not());
}

#[test]
fn config_changes_apply_to_output() {
    let home = TempDir::new().unwrap();
    let input = "config set currency_symbol €\n\
                 income Bonus 50 2024-04-01\n\
                 config show\n\
                 exit\n";

    run_script(home.path(), input)
        .success()
        .stdout(contains("€50.00 - Bonus"))
        .stdout(contains("currency_symbol  : €"));

    let config = fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(config.contains('€'));
}

#[test]
fn time_based_date_format_is_refused_and_entries_are_kept() {
    let home = TempDir::new().unwrap();
    let input = "income Pay 10 2024-01-01\n\
                 config set date_format \"%Y-%m-%d %H\"\n\
                 list\n\
                 exit\n";

    run_script(home.path(), input)
        .success()
        .stdout(contains("is not a valid date format"))
        .stdout(contains("01/01/2024"))
        .stdout(contains("Data saved successfully!"));

    let json = fs::read_to_string(home.path().join("budget.json")).unwrap();
    assert!(json.contains("\"Pay\""));
    let config = fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(!config.contains("%H"));
}

#[test]
fn oversized_amounts_are_rejected_and_summary_still_runs() {
    let home = TempDir::new().unwrap();
    let input = "income A 79228162514264337593543950335 2024-01-01\n\
                 income B 1 2024-01-01\n\
                 summary\n\
                 exit\n";

    run_script(home.path(), input)
        .success()
        .stdout(contains("amount must not exceed"))
        .stdout(contains("Total Income:"))
        .stdout(contains("$1.00"))
        .stdout(contains("Data saved successfully!"));

    let json = fs::read_to_string(home.path().join("budget.json")).unwrap();
    assert!(json.contains("\"B\""));
    assert!(!json.contains("\"A\""));
}
