use std::path::{Path, PathBuf};

use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tracing::{debug, warn};
use tracker_config::{Config, ConfigManager};
use tracker_core::{CoreError, LedgerStorage, LedgerStore, LoadOrigin, LoadWarning};
use tracker_domain::LedgerEntry;
use tracker_storage_json::JsonLedgerStorage;
use uuid::Uuid;

use crate::cli::{
    commands, format,
    io as cli_io,
    output::{self, OutputPreferences},
    registry::CommandRegistry,
    shell::parse_command_line,
};
use crate::errors::{CliError, CommandError};
use crate::utils::paths;

const WELCOME_DATE_FORMAT: &str = "%A, %B %d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Session state owned by the shell: the ledger store, where it lives and
/// the user's preferences. Commands receive it mutably, one at a time.
pub struct ShellContext {
    mode: CliMode,
    pub(crate) registry: CommandRegistry,
    theme: ColorfulTheme,
    storage: Box<dyn LedgerStorage>,
    store: LedgerStore,
    data_path: PathBuf,
    config: Config,
    config_manager: ConfigManager,
    load_origin: LoadOrigin,
    load_warning: Option<LoadWarning>,
    unsaved_changes: bool,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_app_dir(mode, &paths::app_data_dir())
    }

    pub fn with_app_dir(mode: CliMode, app_dir: &Path) -> Result<Self, CliError> {
        Self::with_storage(mode, app_dir, Box::new(JsonLedgerStorage::new()))
    }

    /// Builds a session over an arbitrary storage backend and loads the ledger.
    pub fn with_storage(
        mode: CliMode,
        app_dir: &Path,
        storage: Box<dyn LedgerStorage>,
    ) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(app_dir)?;
        let config = load_config(&config_manager);
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });

        let data_path = config.resolve_data_file(app_dir);
        let report = storage.load(&data_path);
        debug!(
            path = %data_path.display(),
            entries = report.store.count(),
            origin = ?report.origin,
            "session ledger ready"
        );

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            storage,
            store: report.store,
            data_path,
            config,
            config_manager,
            load_origin: report.origin,
            load_warning: report.warning,
            unsaved_changes: false,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn load_origin(&self) -> LoadOrigin {
        self.load_origin
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn add_entry(&mut self, entry: LedgerEntry) -> Uuid {
        self.unsaved_changes = true;
        self.store.add(entry)
    }

    /// Writes the store to the ledger file. The store is untouched on failure.
    pub(crate) fn save(&mut self) -> Result<(), CoreError> {
        self.storage.save(&self.data_path, &self.store)?;
        self.unsaved_changes = false;
        Ok(())
    }

    pub(crate) fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
        });
        Ok(())
    }

    /// Asks the user for a value; script sessions cannot prompt.
    pub(crate) fn prompt_value(&self, label: &str, usage: &str) -> Result<String, CommandError> {
        match self.mode {
            CliMode::Interactive => cli_io::prompt_text(&self.theme, label),
            CliMode::Script => Err(CommandError::InvalidArguments(format!(
                "Missing {}. Usage: {}",
                label.to_lowercase(),
                usage
            ))),
        }
    }

    /// Asks for a value that may be left blank; script sessions get `None`.
    pub(crate) fn prompt_optional(&self, label: &str) -> Result<Option<String>, CommandError> {
        match self.mode {
            CliMode::Interactive => {
                let value = cli_io::prompt_optional_text(&self.theme, label)?;
                let value = value.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            CliMode::Script => Ok(None),
        }
    }

    pub(crate) fn print_welcome(&mut self) {
        output::section("BUDGET TRACKER");
        cli_io::print_info(format!(
            "Today's date: {}",
            Local::now().format(WELCOME_DATE_FORMAT)
        ));
        if let Some(warning) = self.load_warning.take() {
            cli_io::print_warning(format!("{warning}. Starting fresh."));
            if let Some(copy) = &warning.preserved_copy {
                cli_io::print_hint(format!(
                    "The unreadable file was copied to {}",
                    copy.display()
                ));
            }
        }
        cli_io::print_info(format!(
            "Loaded {} existing records from {}.",
            self.store.count(),
            self.data_path.display()
        ));
        cli_io::print_hint("Type `help` for commands, or 1-5 for the menu shortcuts.");
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(err @ CoreError::Persistence { .. }) => {
                cli_io::print_error(format!("Error saving data: {err}"));
                cli_io::print_hint(
                    "Your entries are still in memory. Fix the problem and run `save` or `exit` again.",
                );
            }
            other => cli_io::print_error(other),
        }
    }

    /// Final save when input ends without an explicit `exit`.
    pub(crate) fn finish(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        match self.save() {
            Ok(()) => cli_io::print_success(format!(
                "Data saved to {}.",
                self.data_path.display()
            )),
            Err(err) => {
                warn!(error = %err, "final save failed");
                cli_io::print_error(format!("Error saving data: {err}"));
            }
        }
    }

    pub(crate) fn format_money(&self, amount: rust_decimal::Decimal) -> String {
        format::money(amount, &self.config.currency_symbol)
    }
}

fn load_config(manager: &ConfigManager) -> Config {
    if !manager.config_path().exists() {
        if let Err(err) = manager.save(&Config::default()) {
            warn!(error = %err, "could not write default configuration");
        }
    }
    let mut config = match manager.load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "configuration unreadable, using defaults");
            cli_io::print_warning(format!(
                "Could not read configuration ({err}); using defaults."
            ));
            Config::default()
        }
    };
    if !format::is_valid_date_format(&config.date_format) {
        cli_io::print_warning(format!(
            "Ignoring invalid date format `{}`.",
            config.date_format
        ));
        config.date_format = Config::default_date_format();
    }
    config
}
