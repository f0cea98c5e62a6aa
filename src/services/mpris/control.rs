use tracing::{debug, instrument};

use super::{BusClient, Command, PLAYER_INTERFACE, PlayerId};

/// Sends playback commands to the player chosen at setup.
///
/// The target is fixed when the dispatcher is built. A player that later
/// disappears is not re-resolved here; the update cycle notices it on its
/// next poll and a reset builds a new dispatcher.
#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher {
    target: Option<PlayerId>,
}

impl CommandDispatcher {
    /// Create a dispatcher bound to `target`
    pub fn new(target: Option<PlayerId>) -> Self {
        Self { target }
    }

    /// Player the dispatcher sends commands to
    pub fn target(&self) -> Option<&PlayerId> {
        self.target.as_ref()
    }

    /// Invoke `command` on the target player.
    ///
    /// The outcome is not reported to the caller. Failures are only logged.
    #[instrument(skip(self, bus))]
    pub fn dispatch<B: BusClient>(&self, bus: &B, command: Command) {
        let Some(player) = &self.target else {
            debug!("No player to send command to");
            return;
        };

        match bus.call_method(player, PLAYER_INTERFACE, command.method_name()) {
            Ok(()) => debug!(bus_name = %player, "Command sent"),
            Err(e) => debug!("Command dropped: {e}"),
        }
    }
}
