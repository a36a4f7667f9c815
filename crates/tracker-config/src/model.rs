use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const DEFAULT_LEDGER_FILE: &str = "budget.json";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// chrono format string used for date input and display.
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom ledger file. Defaults to `budget.json` in the app directory.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            date_format: Self::default_date_format(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_file: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_date_format() -> String {
        "%m/%d/%Y".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Resolves the ledger file, relative custom paths being anchored at `app_dir`.
    pub fn resolve_data_file(&self, app_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => app_dir.join(path),
            None => app_dir.join(DEFAULT_LEDGER_FILE),
        }
    }

    /// `~/.budget_tracker`, falling back to the working directory without a home.
    pub fn default_app_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}
