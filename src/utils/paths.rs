use std::{env, path::PathBuf};

use tracker_config::Config;

/// Overrides the application directory (ledger, config) when set.
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

/// Returns the application-specific data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    Config::default_app_dir()
}
