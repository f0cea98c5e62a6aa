/// Bus client abstraction and its D-Bus implementation
pub mod client;
/// Playback command dispatch
pub mod control;
/// Player selection among registered bus names
pub mod discovery;
/// Media player error types
pub mod error;
/// Track metadata decoding
pub mod metadata;
/// Shared MPRIS types and constants
pub mod types;

pub use client::*;
pub use control::*;
pub use discovery::*;
pub use error::*;
pub use metadata::ARTIST_SEPARATOR;
pub use types::*;
