//! Command-line interface.
//!
//! Without a subcommand the binary runs as a bar status command. The other
//! subcommands talk to the player once and exit, which is handy for key
//! bindings and for checking which player would be picked.

pub mod formatting;
mod media;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::{
    bar::BarError, config::ConfigError, module::ModuleError, services::MediaError,
};

pub use media::{players, schema, send, status};

/// Show and control the running media player from a status bar
#[derive(Debug, Parser)]
#[command(name = "playerbar", version, about)]
pub struct Cli {
    /// Config file to use instead of $XDG_CONFIG_HOME/playerbar/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to ~/.playerbar/logs
    #[arg(long, global = true)]
    pub log_file: bool,

    /// What to do; defaults to `run`
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Subcommands of the binary
#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Speak the i3bar protocol on stdin/stdout
    Run {
        /// Seconds between updates, overriding the config file
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Poll the player once and print the song text
    Status,
    /// Toggle playback of the selected player
    PlayPause,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Previous,
    /// List media players on the bus, marking the one that would be used
    Players,
    /// Print the JSON schema of the config file
    Schema,
}

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Module configuration is invalid
    #[error(transparent)]
    Module(#[from] ModuleError),

    /// Talking to the player failed
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Talking to the bar failed
    #[error(transparent)]
    Bar(#[from] BarError),

    /// The schema could not be encoded
    #[error("failed to encode schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// Invalid arguments were provided to a command
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Type alias for command execution results.
pub type CommandResult = Result<String, CliError>;
