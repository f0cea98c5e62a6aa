//! The player status bar module.
//!
//! Turns the configured layout into widgets with input bindings, renders
//! the current track through the format template, and drives the poll and
//! recovery cycle against the selected player.

mod error;
/// Song text templates
pub mod format;
mod layout;
mod player;
mod widget;

pub use error::ModuleError;
pub use format::Template;
pub use layout::{Layout, STATE_NEXT, STATE_PREV};
pub use player::{ModuleState, PlayerModule, STATE_PAUSED, STATE_PLAYING, STATE_SONG};
pub use widget::{InputBinding, MouseButton, Widget, WidgetKind};
