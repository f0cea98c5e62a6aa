use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Song template used when none is configured
pub const DEFAULT_FORMAT: &str = "{artist} - {title}";

/// Widget order used when none is configured
pub const DEFAULT_LAYOUT: &str = "song,previous,pause,next";

/// Player module configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Song text template. Available fields: `{album}`, `{title}`,
    /// `{artist}`, `{trackNumber}`.
    pub format: String,

    /// Comma separated widget order. Widgets: `song`, `previous`, `pause`,
    /// `next` (the `player.` prefixed names are accepted too).
    pub layout: String,

    /// Control the player from the song widget alone: left click toggles
    /// playback, wheel up skips forward, wheel down skips back.
    pub concise_controls: bool,

    /// Bus name patterns excluded from player selection.
    pub ignored_players: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            concise_controls: false,
            ignored_players: Vec::new(),
        }
    }
}
