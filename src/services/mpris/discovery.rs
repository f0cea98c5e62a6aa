use tracing::{debug, info, instrument, warn};

use super::{BusClient, PLAYER_NAME_MARKER, PlayerId};

/// Picks the bus name that represents "the" media player.
///
/// Candidates are names containing the MPRIS marker and none of the ignored
/// patterns. The longest candidate wins, because players usually register a
/// generic name and a more specific instance name that extends it. Among
/// candidates of equal length the first one in listing order is kept.
pub struct PlayerLocator {
    ignored_players: Vec<String>,
}

impl PlayerLocator {
    /// Create a locator that skips names containing any of `ignored_players`
    pub fn new(ignored_players: Vec<String>) -> Self {
        Self { ignored_players }
    }

    /// Query the bus and select a player.
    ///
    /// A bus that cannot be listed counts as having no player.
    #[instrument(skip_all)]
    pub fn locate<B: BusClient>(&self, bus: &B) -> Option<PlayerId> {
        let names = match bus.list_names() {
            Ok(names) => names,
            Err(e) => {
                warn!("Player discovery failed: {e}");
                return None;
            }
        };

        let selected = self.select(&names);
        match &selected {
            Some(player) => info!(bus_name = %player, "Selected media player"),
            None => debug!("No media player registered on the bus"),
        }
        selected
    }

    /// Select a player from an already known list of names
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Option<PlayerId> {
        self.candidates(names)
            .into_iter()
            .fold(None, |best: Option<&str>, name| match best {
                Some(current) if current.len() >= name.len() => Some(current),
                _ => Some(name),
            })
            .map(PlayerId::from_bus_name)
    }

    /// Names that qualify as media players, in listing order
    pub fn candidates<'a, S: AsRef<str>>(&self, names: &'a [S]) -> Vec<&'a str> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| name.contains(PLAYER_NAME_MARKER))
            .filter(|name| !self.is_ignored(name))
            .collect()
    }

    fn is_ignored(&self, bus_name: &str) -> bool {
        self.ignored_players
            .iter()
            .any(|pattern| bus_name.contains(pattern.as_str()))
    }
}

impl Default for PlayerLocator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
