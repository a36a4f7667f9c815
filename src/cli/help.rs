use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        let name = match entry.alias {
            Some(alias) => format!("{} ({})", entry.name, alias),
            None => entry.name.to_string(),
        };
        io::print_info(format!("  {:<14} {}", name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
    if let Some(alias) = entry.alias {
        io::print_info(format!("  Shortcut: {}", alias));
    }
}
