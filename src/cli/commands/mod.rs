pub mod config;
pub mod entry;
pub mod report;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(entry::definitions());
    commands.extend(report::definitions());
    commands.extend(system::definitions());
    commands.extend(config::definitions());
    commands
}

/// Registers every shell command, keeping the menu order of the numeric aliases.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for definition in all_definitions() {
        registry.register(definition);
    }
}
