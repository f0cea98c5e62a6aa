/// MPRIS media player access over D-Bus
pub mod mpris;

pub use mpris::{BusClient, DbusClient, MediaError, PlayerId};
