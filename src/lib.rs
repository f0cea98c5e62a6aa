//! playerbar - media player module for status bars.
//!
//! Finds the running MPRIS media player on the session bus, shows the
//! current track in a status bar and sends play/pause, next and previous
//! commands back when the widgets are clicked or scrolled.
//!
//! - Player selection and D-Bus access live in [`services::mpris`]
//! - The widget layout, song template and update cycle live in [`module`]
//! - [`bar`] speaks the i3bar protocol on stdin/stdout
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use playerbar::{config::PlayerConfig, module::PlayerModule, services::DbusClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bus = DbusClient::session()?;
//! let mut module = PlayerModule::new(bus, &PlayerConfig::default())?;
//!
//! module.update();
//! if !module.hidden() {
//!     println!("{}", module.song());
//! }
//! # Ok(())
//! # }
//! ```

/// Host adapter for i3bar-compatible bars.
pub mod bar;

/// Command-line interface.
pub mod cli;

/// Configuration schema definitions and loading.
pub mod config;

/// Widgets, song template and the update cycle.
pub mod module;

/// D-Bus services used by the module.
pub mod services;

/// Logging setup.
pub mod tracing_config;

pub use module::{ModuleError, PlayerModule};
pub use services::MediaError;
