use std::{io, path::PathBuf};

use thiserror::Error;
use tracker_domain::EntryError;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    InvalidEntry(#[from] EntryError),
    #[error("Duplicate entry id: {0}")]
    DuplicateEntry(Uuid),
    #[error("Persistence error at {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl CoreError {
    pub fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::Persistence {
            path: path.into(),
            source,
        }
    }
}
