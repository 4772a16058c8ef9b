//! Configuration for the sqlpart CLI.
//!
//! ```toml
//! # sqlpart.toml
//! dialect = "mysql"
//! log_filter = "sqlpart=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};

/// Settings read from `sqlpart.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dialect used when none is given on the command line.
    pub dialect: Dialect,

    /// `tracing` filter directive, e.g. `sqlpart=debug`.
    pub log_filter: Option<String>,
}

impl Config {
    /// Name of the project-local config file.
    pub const FILE_NAME: &'static str = "sqlpart.toml";

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> SqlResult<Self> {
        toml::from_str(content).map_err(|e| SqlError::Config(e.to_string()))
    }

    /// Read a config file.
    pub fn load_from(path: &Path) -> SqlResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SqlError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// [`search_paths`](Self::search_paths) is used, or the defaults when
    /// there is none.
    pub fn load(explicit: Option<&Path>) -> SqlResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load_from(path);
        }

        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from(&path)
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `./sqlpart.toml`, then `<config dir>/sqlpart/config.toml`.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(Self::FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlpart").join("config.toml"));
        }
        paths
    }
}
