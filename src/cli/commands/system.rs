use tracing::info;

use crate::cli::help;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::errors::{CommandError, CommandResult};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("exit", "Save and exit", "exit", cmd_exit).with_alias("5"),
        CommandEntry::new("save", "Save without exiting", "save", cmd_save),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show the program version", "version", cmd_version),
    ]
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    // A failed save leaves the shell open so the user can retry.
    context.save()?;
    info!(path = %context.data_path().display(), "saved on exit");
    io::print_success("Data saved successfully!");
    io::print_info("Thanks for using Budget Tracker. Goodbye!");
    Err(CommandError::ExitRequested)
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.save()?;
    io::print_success(format!(
        "Data saved to {}.",
        context.data_path().display()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.registry.get(&command) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}
