use std::collections::HashSet;

use super::{ModuleError, MouseButton, Widget, WidgetKind};
use crate::services::mpris::Command;

/// State key of the previous button
pub const STATE_PREV: &str = "prev";
/// State key of the next button
pub const STATE_NEXT: &str = "next";

/// Ordered widget kinds parsed from the layout setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    kinds: Vec<WidgetKind>,
}

impl Layout {
    /// Parse a comma separated list of widget names.
    ///
    /// Names are trimmed and empty entries are skipped.
    ///
    /// # Errors
    /// Returns `ModuleError::UnknownWidget` naming the first token that is not
    /// a widget, or `ModuleError::DuplicateWidget` if a widget is listed twice
    pub fn parse(layout: &str) -> Result<Self, ModuleError> {
        let tokens: Vec<&str> = layout
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        Self::from_tokens(&tokens)
    }

    /// Build a layout from already separated tokens
    ///
    /// # Errors
    /// Same as [`Layout::parse`]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ModuleError> {
        let mut seen = HashSet::new();
        let mut kinds = Vec::with_capacity(tokens.len());

        for token in tokens {
            let token = token.as_ref();
            let kind = WidgetKind::from_token(token).ok_or_else(|| ModuleError::UnknownWidget {
                token: token.to_string(),
            })?;

            if !seen.insert(kind) {
                return Err(ModuleError::DuplicateWidget {
                    name: kind.name().to_string(),
                });
            }
            kinds.push(kind);
        }

        Ok(Self { kinds })
    }

    /// Widget kinds in display order
    pub fn kinds(&self) -> &[WidgetKind] {
        &self.kinds
    }

    /// Create the widgets with their input bindings.
    ///
    /// With `concise_controls` the song widget also toggles playback on click
    /// and skips tracks with the scroll wheel.
    pub fn build(&self, concise_controls: bool) -> Vec<Widget> {
        self.kinds
            .iter()
            .map(|kind| build_widget(*kind, concise_controls))
            .collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            kinds: vec![
                WidgetKind::Song,
                WidgetKind::Previous,
                WidgetKind::Pause,
                WidgetKind::Next,
            ],
        }
    }
}

fn build_widget(kind: WidgetKind, concise_controls: bool) -> Widget {
    let widget = Widget::new(kind);
    match kind {
        WidgetKind::Previous => widget
            .bind(MouseButton::Left, Command::Previous)
            .with_state(STATE_PREV),
        WidgetKind::Pause => widget.bind(MouseButton::Left, Command::PlayPause),
        WidgetKind::Next => widget
            .bind(MouseButton::Left, Command::Next)
            .with_state(STATE_NEXT),
        WidgetKind::Song if concise_controls => widget
            .bind(MouseButton::Left, Command::PlayPause)
            .bind(MouseButton::WheelUp, Command::Next)
            .bind(MouseButton::WheelDown, Command::Previous),
        WidgetKind::Song => widget,
    }
}
