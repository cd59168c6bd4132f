use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible edges of the members view: loading rosters and
/// reading configuration. Policy and rendering never fail.
#[derive(Debug, Error)]
pub enum MembersError {
    #[error("Failed to read roster file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MembersError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T, E = MembersError> = std::result::Result<T, E>;
