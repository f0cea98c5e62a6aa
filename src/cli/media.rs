use schemars::schema_for;
use tracing::instrument;

use super::{CommandResult, formatting::format_player};
use crate::{
    config::{Config, PlayerConfig},
    module::PlayerModule,
    services::{
        BusClient, MediaError,
        mpris::{Command, PLAYER_INTERFACE, PlayerLocator},
    },
};

/// Poll the player once and return the rendered song text.
///
/// The text is empty when no player is reachable.
///
/// # Errors
/// Returns `CliError::Module` if the player configuration is invalid
#[instrument(skip_all)]
pub fn status<B: BusClient>(bus: B, config: &PlayerConfig) -> CommandResult {
    let mut module = PlayerModule::new(bus, config)?;
    module.update();
    Ok(module.song().to_string())
}

/// Send one playback command to the selected player.
///
/// Unlike clicks in the bar, failures are reported.
///
/// # Errors
/// Returns `CliError::Media` if no player is found or the call fails
#[instrument(skip(bus, config))]
pub fn send<B: BusClient>(bus: &B, config: &PlayerConfig, command: Command) -> CommandResult {
    let locator = PlayerLocator::new(config.ignored_players.clone());
    let player = locator.locate(bus).ok_or(MediaError::NoPlayer)?;

    bus.call_method(&player, PLAYER_INTERFACE, command.method_name())?;

    Ok(format!("Sent {command} to {player}"))
}

/// List the media players on the bus, marking the selected one
///
/// # Errors
/// Returns `CliError::Media` if the bus cannot be listed
pub fn players<B: BusClient>(bus: &B, config: &PlayerConfig) -> CommandResult {
    let locator = PlayerLocator::new(config.ignored_players.clone());
    let names = bus.list_names()?;
    let selected = locator.select(&names);

    let lines: Vec<String> = locator
        .candidates(&names)
        .into_iter()
        .map(|name| format_player(name, selected.as_ref().is_some_and(|s| s.bus_name() == name)))
        .collect();

    if lines.is_empty() {
        return Ok("No media players found".to_string());
    }
    Ok(lines.join("\n"))
}

/// JSON schema of the configuration file
///
/// # Errors
/// Returns `CliError::Schema` if encoding fails
pub fn schema() -> CommandResult {
    Ok(serde_json::to_string_pretty(&schema_for!(Config))?)
}
