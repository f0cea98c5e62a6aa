//! Configuration schema, defaults and loading.
//!
//! The configuration is a TOML file with a `[general]` section for process
//! wide settings and a `[player]` section for the module itself. Every field
//! has a default, so an empty or missing file is valid.

mod error;
mod general;
mod loading;
mod paths;
mod player;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use general::{DEFAULT_INTERVAL_SECS, GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::{DEFAULT_FORMAT, DEFAULT_LAYOUT, PlayerConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player module settings.
    #[serde(default)]
    pub player: PlayerConfig,
}
