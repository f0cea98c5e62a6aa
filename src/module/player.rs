use tracing::{debug, error, info, instrument, warn};

use super::{Layout, ModuleError, MouseButton, Template, Widget, WidgetKind};
use crate::{
    config::PlayerConfig,
    services::mpris::{
        BusClient, CommandDispatcher, MediaError, Metadata, PLAYER_INTERFACE, PlaybackState,
        PlayerId, PlayerLocator, metadata::scalar_text,
    },
};

/// State key of the song widget after a successful poll
pub const STATE_SONG: &str = "song";
/// State key of the pause widget while the player is playing
pub const STATE_PLAYING: &str = "playing";
/// State key of the pause widget otherwise
pub const STATE_PAUSED: &str = "paused";

/// Where the update cycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// No player has been selected yet
    NoPlayer,
    /// A player is selected and the last poll succeeded
    Active,
    /// A player is selected and the last poll failed
    Errored,
}

/// The player status bar module.
///
/// Owns the bus client, the selected player and the widgets. The host calls
/// [`PlayerModule::update`] on every tick and [`PlayerModule::handle_input`]
/// for every click or scroll; both run on the same thread of control.
pub struct PlayerModule<B: BusClient> {
    bus: B,
    locator: PlayerLocator,
    template: Template,
    layout: Layout,
    concise_controls: bool,
    player: Option<PlayerId>,
    dispatcher: CommandDispatcher,
    widgets: Vec<Widget>,
    song: String,
    state: ModuleState,
}

impl<B: BusClient> PlayerModule<B> {
    /// Validate the configuration, locate a player and build the widgets.
    ///
    /// Finding no player is not an error; the module stays hidden and keeps
    /// looking on every tick.
    ///
    /// # Errors
    /// Returns `ModuleError` if the layout or format template is invalid
    #[instrument(skip_all)]
    pub fn new(bus: B, config: &PlayerConfig) -> Result<Self, ModuleError> {
        let layout = Layout::parse(&config.layout)?;
        let template = Template::parse(&config.format)?;

        let mut module = Self {
            bus,
            locator: PlayerLocator::new(config.ignored_players.clone()),
            template,
            layout,
            concise_controls: config.concise_controls,
            player: None,
            dispatcher: CommandDispatcher::default(),
            widgets: Vec::new(),
            song: String::new(),
            state: ModuleState::NoPlayer,
        };
        module.reset();

        Ok(module)
    }

    /// Locate the player again and rebuild widgets and command bindings.
    ///
    /// Everything derived from the previous player is discarded, so this is
    /// also the way to follow a player that restarted under a new name.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.player = self.locator.locate(&self.bus);
        self.dispatcher = CommandDispatcher::new(self.player.clone());
        self.widgets = self.layout.build(self.concise_controls);
        self.song.clear();
        self.state = match self.player {
            Some(_) => ModuleState::Active,
            None => ModuleState::NoPlayer,
        };
    }

    /// Run one tick of the update cycle.
    ///
    /// Without a player the locator runs again; once a player is known its
    /// metadata and playback status are read and pushed into the widgets. A
    /// failed read clears the song text, which hides the module until a later
    /// tick succeeds.
    pub fn update(&mut self) {
        if self.state == ModuleState::NoPlayer {
            self.reset();
        }

        let Some(player) = self.player.clone() else {
            self.clear_song();
            return;
        };

        match self.poll(&player) {
            Ok((song, playback)) => self.apply(song, playback),
            Err(e) => self.fail(&e),
        }
    }

    /// Route an input event to the commands bound on the named widget.
    ///
    /// Returns whether any command was dispatched.
    pub fn handle_input(&self, widget_name: &str, button: MouseButton) -> bool {
        let Some(widget) = self.widgets.iter().find(|w| w.name() == widget_name) else {
            debug!(widget = widget_name, "Input for unknown widget ignored");
            return false;
        };

        if self.dispatcher.target().is_none() {
            debug!(widget = widget_name, "No player selected, input ignored");
            return false;
        }

        let mut dispatched = false;
        for command in widget.commands_for(button) {
            self.dispatcher.dispatch(&self.bus, command);
            dispatched = true;
        }
        dispatched
    }

    /// Whether the host should leave the module out of the bar
    pub fn hidden(&self) -> bool {
        self.song.is_empty()
    }

    /// Widgets in display order
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Widget of the given kind, if the layout contains it
    pub fn widget(&self, kind: WidgetKind) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.kind() == kind)
    }

    /// Current state of the update cycle
    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// Player selected at the last setup
    pub fn player(&self) -> Option<&PlayerId> {
        self.player.as_ref()
    }

    /// Song text rendered by the last poll
    pub fn song(&self) -> &str {
        &self.song
    }

    fn poll(&self, player: &PlayerId) -> Result<(String, PlaybackState), MediaError> {
        let value = self
            .bus
            .get_property(player, PLAYER_INTERFACE, "Metadata")?;
        let metadata = Metadata::from_property(player, value)?;
        let song = self.template.render(&metadata);

        let status = self
            .bus
            .get_property(player, PLAYER_INTERFACE, "PlaybackStatus")?;
        let status = scalar_text(&status)
            .ok_or_else(|| MediaError::malformed(player, "PlaybackStatus is not a string"))?;

        Ok((song, PlaybackState::from(status.as_str())))
    }

    fn apply(&mut self, song: String, playback: PlaybackState) {
        if self.state == ModuleState::Errored {
            info!("Player reachable again");
        }

        let pause_state = match playback {
            PlaybackState::Playing => STATE_PLAYING,
            PlaybackState::Paused => STATE_PAUSED,
        };

        for widget in &mut self.widgets {
            match widget.kind() {
                WidgetKind::Song => {
                    widget.set_state(STATE_SONG);
                    widget.set_full_text(&song);
                }
                WidgetKind::Pause => widget.set_state(pause_state),
                WidgetKind::Previous | WidgetKind::Next => {}
            }
        }

        self.song = song;
        self.state = ModuleState::Active;
    }

    fn fail(&mut self, e: &MediaError) {
        if self.state == ModuleState::Errored {
            debug!("Player still unavailable: {e}");
        } else {
            match e {
                MediaError::MalformedMetadata { .. } => error!("Failed to update player: {e}"),
                _ => warn!("Failed to update player: {e}"),
            }
        }

        self.clear_song();
        self.state = ModuleState::Errored;
    }

    fn clear_song(&mut self) {
        self.song.clear();
        for widget in &mut self.widgets {
            if widget.kind() == WidgetKind::Song {
                widget.set_full_text("");
            }
        }
    }
}
