use std::fmt;

use crate::services::mpris::Command;

/// Mouse input the module reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button click
    Left,
    /// Scroll wheel up
    WheelUp,
    /// Scroll wheel down
    WheelDown,
}

impl MouseButton {
    /// Map an X11 / i3bar button number, ignoring buttons the module does not bind
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Left),
            4 => Some(Self::WheelUp),
            5 => Some(Self::WheelDown),
            _ => None,
        }
    }
}

/// Kind of widget the player module can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Formatted song text
    Song,
    /// Skip back button
    Previous,
    /// Play/pause toggle
    Pause,
    /// Skip forward button
    Next,
}

impl WidgetKind {
    /// Stable widget name reported to the host
    pub fn name(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Previous => "previous",
            Self::Pause => "pause",
            Self::Next => "next",
        }
    }

    /// Resolve a layout token, accepting the `player.` prefixed names as well
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "song" | "player.song" => Some(Self::Song),
            "previous" | "prev" | "player.prev" | "player.previous" => Some(Self::Previous),
            "pause" | "player.pause" => Some(Self::Pause),
            "next" | "player.next" => Some(Self::Next),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input event bound to a playback command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBinding {
    /// Button that triggers the command
    pub button: MouseButton,
    /// Command sent to the player
    pub command: Command,
}

impl InputBinding {
    /// Create a binding
    pub fn new(button: MouseButton, command: Command) -> Self {
        Self { button, command }
    }
}

/// One widget of the player module.
///
/// Kind and bindings are fixed once the layout is built; only the text and
/// the state key change while polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    kind: WidgetKind,
    full_text: String,
    state: Option<String>,
    bindings: Vec<InputBinding>,
}

impl Widget {
    /// Create a widget with no text, no state and no bindings
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            full_text: String::new(),
            state: None,
            bindings: Vec::new(),
        }
    }

    /// Attach another input binding
    pub fn bind(mut self, button: MouseButton, command: Command) -> Self {
        self.bindings.push(InputBinding::new(button, command));
        self
    }

    /// Set the initial state key
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// Widget kind
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Widget name reported to the host
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Text shown by the widget
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// State key used by the host to pick an icon or theme
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Input bindings of the widget
    pub fn bindings(&self) -> &[InputBinding] {
        &self.bindings
    }

    /// Commands bound to `button`, in binding order
    pub fn commands_for(&self, button: MouseButton) -> impl Iterator<Item = Command> + '_ {
        self.bindings
            .iter()
            .filter(move |binding| binding.button == button)
            .map(|binding| binding.command)
    }

    pub(crate) fn set_full_text(&mut self, text: &str) {
        text.clone_into(&mut self.full_text);
    }

    pub(crate) fn set_state(&mut self, state: &str) {
        self.state = Some(state.to_string());
    }
}
