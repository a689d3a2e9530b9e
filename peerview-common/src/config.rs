//! Configuration file resolution and loading
//!
//! Configuration is read once at a binary's entry point and handed down as a
//! plain value. Nothing below the entry point consults the environment.
//! Loading happens before logging is set up, so the entry point logs the
//! resolved `ConfigSource` itself once its subscriber is installed.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "peerview";

/// Logging section shared by every PeerView binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given explicitly (command line or its environment fallback)
    Explicit(PathBuf),
    /// File found in the user's platform config directory
    UserConfigDir(PathBuf),
    /// No file; compiled defaults apply
    CompiledDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::UserConfigDir(path) => write!(f, "{} (user config dir)", path.display()),
            ConfigSource::CompiledDefaults => write!(f, "compiled defaults"),
        }
    }
}

/// Resolve the configuration file to use
///
/// Priority order:
/// 1. Explicit path (command-line argument, which clap may fill from an
///    environment variable at the entry point)
/// 2. `<config_dir>/peerview/<file_name>` if it exists
/// 3. Compiled defaults
pub fn resolve_config_source(explicit: Option<&Path>, file_name: &str) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = user_config_path(file_name) {
        if path.exists() {
            return ConfigSource::UserConfigDir(path);
        }
    }

    ConfigSource::CompiledDefaults
}

/// Platform location of a PeerView config file (may not exist)
pub fn user_config_path(file_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(file_name))
}

/// Load a TOML configuration value from the resolved source
///
/// An explicitly named file must exist and parse; compiled defaults never fail.
pub fn load_toml_config<T>(source: &ConfigSource) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match source {
        ConfigSource::Explicit(path) | ConfigSource::UserConfigDir(path) => read_toml_file(path),
        ConfigSource::CompiledDefaults => Ok(T::default()),
    }
}

/// Parse a TOML file into `T`
pub fn read_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}
