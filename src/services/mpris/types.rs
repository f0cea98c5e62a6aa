use std::fmt;

/// Well-known object path every MPRIS player exports
pub const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";

/// Playback control interface of an MPRIS player
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Substring a bus name must contain to be considered a media player
pub const PLAYER_NAME_MARKER: &str = "MediaPlayer2";

/// Unique identifier for a media player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current playback state of a media player
///
/// Only an exact `"Playing"` status counts as playing; every other value the
/// player reports is treated as paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused, stopped, or reported something unexpected
    #[default]
    Paused,
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            _ => Self::Paused,
        }
    }
}

/// Player control actions bound to widget input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Toggle play/pause
    PlayPause,

    /// Skip to next track
    Next,

    /// Go to previous track
    Previous,
}

impl Command {
    /// Name of the method invoked on the player interface
    pub fn method_name(self) -> &'static str {
        match self {
            Self::PlayPause => "PlayPause",
            Self::Next => "Next",
            Self::Previous => "Previous",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Track fields available to the song format template
///
/// Every field is always present; values the player did not report are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Album name
    pub album: String,

    /// Track title
    pub title: String,

    /// Artist names joined with `,`
    pub artist: String,

    /// Track number in decimal
    pub track_number: String,
}
