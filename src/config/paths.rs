use std::{env, fs, path::PathBuf};

use super::{ConfigError, Result};

const APP_NAME: &str = "playerbar";

/// Locations of configuration and log files.
///
/// Follows the XDG Base Directory layout for configuration.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory of the application
    ///
    /// Checks `XDG_CONFIG_HOME` first, then falls back to `$HOME/.config`.
    ///
    /// # Errors
    /// Returns `ConfigError::NoConfigDir` if neither variable is set
    pub fn config_dir() -> Result<PathBuf> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| ConfigError::NoConfigDir)?;

        Ok(PathBuf::from(config_home).join(APP_NAME))
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::NoConfigDir` if the config directory is unknown
    pub fn main_config() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log directory, creating it if needed
    ///
    /// # Errors
    /// Returns error if `HOME` is unset or the directory cannot be created
    pub fn log_dir() -> Result<PathBuf> {
        let home = env::var("HOME").map_err(|_| ConfigError::NoConfigDir)?;
        let log_dir = PathBuf::from(home).join(format!(".{APP_NAME}")).join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).map_err(|e| ConfigError::io(&e, &log_dir))?;
        }

        Ok(log_dir)
    }
}
