use std::io;

use thiserror::Error;

/// Failures reading or writing the preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access the configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("configuration file is not valid JSON: {0}")]
    Serde(String),
}
