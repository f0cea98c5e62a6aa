use super::PlayerId;

/// Errors that can occur while talking to a media player over D-Bus
///
/// Variants separate the failure kinds the update cycle treats differently:
/// discovery problems keep the module searching, property and metadata
/// problems hide it until the next successful poll, and method failures are
/// discarded by the dispatcher.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// Could not connect to the session bus
    #[error("failed to connect to the session bus: {0}")]
    ConnectionFailed(#[source] zbus::Error),

    /// Listing registered bus names failed
    #[error("failed to list bus names: {0}")]
    Discovery(#[source] zbus::Error),

    /// Reading a property from the player failed
    #[error("failed to read {interface}.{property} from {player}: {source}")]
    PropertyRead {
        /// Player the property was read from
        player: PlayerId,
        /// Interface owning the property
        interface: String,
        /// Property name
        property: String,
        /// Underlying D-Bus error
        #[source]
        source: zbus::Error,
    },

    /// Invoking a method on the player failed
    #[error("failed to call {interface}.{method} on {player}: {source}")]
    MethodCall {
        /// Player the method was invoked on
        player: PlayerId,
        /// Interface owning the method
        interface: String,
        /// Method name
        method: String,
        /// Underlying D-Bus error
        #[source]
        source: zbus::Error,
    },

    /// The player returned data that does not follow the MPRIS layout
    #[error("malformed metadata from {player}: {reason}")]
    MalformedMetadata {
        /// Player that sent the data
        player: PlayerId,
        /// What was wrong with it
        reason: String,
    },

    /// No player is currently selected
    #[error("no media player found on the bus")]
    NoPlayer,
}

impl MediaError {
    /// Create a malformed metadata error
    pub fn malformed(player: &PlayerId, reason: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            player: player.clone(),
            reason: reason.into(),
        }
    }
}
