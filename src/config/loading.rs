use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, info, instrument};

use super::{Config, ConfigError, ConfigPaths, Result};

impl Config {
    /// Load the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one the default
    /// location is used, and a missing file there yields the defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or holds values that fail validation
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = ConfigPaths::main_config()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    info!(path = %path.display(), "No config file, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load and validate the configuration stored at `path`
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::io(&e, path),
            _ => ConfigError::Io(e),
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::toml_parse(e, Some(path)))?;
        config.validate()?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Errors
    /// Returns `ConfigError` if the string is not valid TOML or fails validation
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot reject on its own
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfigField` for the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.general.interval == 0 {
            return Err(ConfigError::InvalidConfigField {
                field: "interval".to_string(),
                component: "general".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}
