//! i3bar JSON protocol.
//!
//! The status command prints a header object, then an endless JSON array
//! whose elements are status lines (arrays of blocks). When click events
//! are enabled the bar writes an endless array of click objects to stdin,
//! one per line.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::BarError;
use crate::{
    module::{
        MouseButton, PlayerModule, STATE_NEXT, STATE_PAUSED, STATE_PLAYING, STATE_PREV, Widget,
        WidgetKind,
    },
    services::BusClient,
};

/// Block name shared by every widget of the module
pub const BLOCK_NAME: &str = "player";

/// First line sent to the bar
#[derive(Debug, Serialize)]
pub struct Header {
    /// Protocol version
    pub version: u32,
    /// Ask the bar to report clicks on stdin
    pub click_events: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: 1,
            click_events: true,
        }
    }
}

/// One block of a status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Module name
    pub name: &'static str,
    /// Widget name, echoed back in click events
    pub instance: &'static str,
    /// Text shown in the bar
    pub full_text: String,
}

/// Click reported by the bar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClickEvent {
    /// Block name
    #[serde(default)]
    pub name: Option<String>,
    /// Block instance
    #[serde(default)]
    pub instance: Option<String>,
    /// X11 button number
    pub button: u32,
}

impl ClickEvent {
    /// Parse one line of the click event stream.
    ///
    /// Returns `None` for the opening bracket, separators and blank lines.
    ///
    /// # Errors
    /// Returns error if the line holds something that is not a click object
    pub fn parse_line(line: &str) -> Result<Option<Self>, serde_json::Error> {
        let line = line.trim().trim_start_matches(',').trim();
        if line.is_empty() || line == "[" || line == "]" {
            return Ok(None);
        }

        serde_json::from_str(line).map(Some)
    }

    /// Widget and button this event targets, if it belongs to the module
    pub fn target(&self) -> Option<(&str, MouseButton)> {
        if self.name.as_deref().is_some_and(|name| name != BLOCK_NAME) {
            return None;
        }

        let instance = self.instance.as_deref()?;
        let button = MouseButton::from_code(self.button)?;
        Some((instance, button))
    }
}

/// Text of a control widget for its current state
pub fn control_glyph(state: Option<&str>) -> &'static str {
    match state {
        Some(STATE_PREV) => "⏮",
        Some(STATE_NEXT) => "⏭",
        Some(STATE_PLAYING) => "⏸",
        Some(STATE_PAUSED) => "▶",
        _ => "",
    }
}

fn block(widget: &Widget) -> Block {
    let full_text = match widget.kind() {
        WidgetKind::Song => widget.full_text().to_string(),
        _ => control_glyph(widget.state()).to_string(),
    };

    Block {
        name: BLOCK_NAME,
        instance: widget.name(),
        full_text,
    }
}

/// Blocks for the current module state; empty while the module is hidden
pub fn blocks<B: BusClient>(module: &PlayerModule<B>) -> Vec<Block> {
    if module.hidden() {
        return Vec::new();
    }

    module.widgets().iter().map(block).collect()
}

/// Writes the header and status lines of the protocol
pub struct StatusWriter<W: Write> {
    out: W,
    first_line: bool,
}

impl<W: Write> StatusWriter<W> {
    /// Wrap an output stream
    pub fn new(out: W) -> Self {
        Self {
            out,
            first_line: true,
        }
    }

    /// Write the header and open the endless status array
    ///
    /// # Errors
    /// Returns error if writing fails
    pub fn start(&mut self) -> Result<(), BarError> {
        serde_json::to_writer(&mut self.out, &Header::default())?;
        self.out.write_all(b"\n[\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Write one status line
    ///
    /// # Errors
    /// Returns error if encoding or writing fails
    pub fn write_status(&mut self, blocks: &[Block]) -> Result<(), BarError> {
        if !self.first_line {
            self.out.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.out, blocks)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.first_line = false;
        Ok(())
    }

    /// Consume the writer and return the stream
    pub fn into_inner(self) -> W {
        self.out
    }
}
