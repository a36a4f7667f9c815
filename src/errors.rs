use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;
use tracker_config::ConfigError;
use tracker_core::CoreError;
use tracker_domain::EntryError;

/// Process-level failures that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Failures of a single command; reported to the user while the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Input failed: {0}")]
    Prompt(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Exit requested")]
    ExitRequested,
}

impl From<EntryError> for CommandError {
    fn from(err: EntryError) -> Self {
        CommandError::Core(CoreError::from(err))
    }
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Prompt(err.to_string())
    }
}

pub type CommandResult = Result<(), CommandError>;
