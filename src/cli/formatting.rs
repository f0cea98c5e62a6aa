//! Formatting helpers for CLI output.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats one entry of the player list, highlighting the selected one
pub fn format_player(bus_name: &str, selected: bool) -> String {
    if selected {
        format!("{}{}* {bus_name}{}", Colors::BOLD, Colors::GREEN, Colors::RESET)
    } else {
        format!("{}  {bus_name}{}", Colors::DIM, Colors::RESET)
    }
}
