//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/todokit/todokit.toml`
//! 3. Environment variables: `TODOKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-configurable settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Roster used when a command does not name one
    pub default_roster: Option<PathBuf>,
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings with an explicit global config path.
    ///
    /// A missing file is not an error; the layer is simply skipped.
    pub fn load_from(global: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = global {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("TODOKIT"));

        builder.build()?.try_deserialize()
    }

    /// `$XDG_CONFIG_HOME/todokit/todokit.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "todokit").map(|dirs| dirs.config_dir().join("todokit.toml"))
    }
}
