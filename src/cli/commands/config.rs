use std::path::PathBuf;

use crate::cli::format;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::errors::{CommandError, CommandResult};

const USAGE: &str =
    "config [show|set <currency_symbol|date_format|ui_color_enabled|data_file> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    if !args[0].eq_ignore_ascii_case("set") || args.len() < 3 {
        return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
    }
    let key = args[1].to_lowercase();
    let value = args[2..].join(" ");
    set_value(context, &key, value.trim())?;
    context.persist_config()?;
    Ok(())
}

fn show_config(context: &ShellContext) {
    let config = context.config();
    output_section("Configuration");
    io::print_info(format!("  currency_symbol  : {}", config.currency_symbol));
    io::print_info(format!("  date_format      : {}", config.date_format));
    io::print_info(format!("  ui_color_enabled : {}", config.ui_color_enabled));
    io::print_info(format!("  data_file        : {}", context.data_path().display()));
}

fn set_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key {
        "currency_symbol" => {
            context.config_mut().currency_symbol = value.to_string();
            io::print_success(format!("Currency symbol set to `{value}`."));
        }
        "date_format" => {
            if !format::is_valid_date_format(value) {
                return Err(CommandError::InvalidArguments(format!(
                    "`{value}` is not a valid date format (try %m/%d/%Y or %Y-%m-%d)."
                )));
            }
            context.config_mut().date_format = value.to_string();
            io::print_success(format!("Date format set to `{value}`."));
        }
        "ui_color_enabled" => {
            let enabled = parse_switch(value).ok_or_else(|| {
                CommandError::InvalidArguments(format!("`{value}` is not on/off."))
            })?;
            context.config_mut().ui_color_enabled = enabled;
            io::print_success(format!(
                "Colors {}.",
                if enabled { "enabled" } else { "disabled" }
            ));
        }
        "data_file" => {
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "data_file needs a path.".into(),
                ));
            }
            context.config_mut().data_file = Some(PathBuf::from(value));
            io::print_success(format!("Data file set to `{value}`."));
            io::print_hint("The new location is used from the next start.");
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown configuration key `{other}`. Usage: {USAGE}"
            )))
        }
    }
    Ok(())
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
