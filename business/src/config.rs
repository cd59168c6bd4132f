use std::env::vars;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::error::{MembersError, Result};
use crate::roster::Roster;

/// Environment variables as read, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub members_file: Option<String>,
    pub members_loading: Option<bool>,
}

/// Configuration of the members demo page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembersConfig {
    members_file: Option<PathBuf>,
    initial_loading: bool,
}

impl MembersConfig {
    /// Reads `MEMBERS_FILE` and `MEMBERS_LOADING` from the environment.
    pub fn init() -> Result<Self> {
        info!("Loading members configuration from environment variables");

        let raw: RawConfig =
            serde_env::from_iter(vars()).map_err(|e| MembersError::config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let RawConfig {
            members_file,
            members_loading,
        } = raw;

        let members_file = match members_file.map(|file| file.trim().to_owned()) {
            Some(file) if file.is_empty() => {
                return Err(MembersError::config("MEMBERS_FILE is set but empty"));
            }
            Some(file) => {
                info!("Using roster file {file}");
                Some(PathBuf::from(file))
            }
            None => {
                info!("MEMBERS_FILE not set, using the built-in sample roster");
                None
            }
        };

        Ok(Self {
            members_file,
            initial_loading: members_loading.unwrap_or(false),
        })
    }

    pub fn members_file(&self) -> Option<&Path> {
        self.members_file.as_deref()
    }

    pub fn initial_loading(&self) -> bool {
        self.initial_loading
    }

    /// The configured roster, or the sample roster when none is configured.
    ///
    /// A configured file that cannot be read is an error; the page should not
    /// silently show someone else's organization.
    pub fn roster(&self) -> Result<Roster> {
        match &self.members_file {
            Some(path) => Roster::load(path),
            None => {
                warn!("No roster file configured, showing sample members");
                Ok(Roster::sample())
            }
        }
    }
}
