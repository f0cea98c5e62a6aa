//! Host side of the module: drives ticks and feeds clicks from an
//! i3bar-compatible bar.

mod error;
pub mod protocol;

use std::{io, time::Duration};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    signal, task,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, instrument, warn};

pub use error::BarError;
use protocol::{ClickEvent, StatusWriter};

use crate::{module::PlayerModule, services::BusClient};

/// Handle one line from the click event stream.
///
/// Returns whether a command was dispatched.
pub fn handle_click_line<B: BusClient>(module: &PlayerModule<B>, line: &str) -> bool {
    let event = match ClickEvent::parse_line(line) {
        Ok(Some(event)) => event,
        Ok(None) => return false,
        Err(e) => {
            warn!("Ignoring malformed click event: {e}");
            return false;
        }
    };

    match event.target() {
        Some((widget, button)) => module.handle_input(widget, button),
        None => false,
    }
}

/// Run the module until interrupted.
///
/// Every tick polls the player and prints a status line. Clicks are read
/// from stdin; a click that dispatched a command is followed by an
/// immediate poll so the bar reflects it. Bus calls block, so they run
/// inside `block_in_place` on this single task.
///
/// # Errors
/// Returns `BarError` if stdout can no longer be written
#[instrument(skip(module))]
pub async fn run<B: BusClient>(
    mut module: PlayerModule<B>,
    interval: Duration,
) -> Result<(), BarError> {
    let mut writer = StatusWriter::new(io::stdout());
    writer.start()?;

    let mut clicks = BufReader::new(tokio::io::stdin()).lines();
    let mut clicks_open = true;

    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    info!("Player module running");
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Interrupted, stopping");
                return Ok(());
            }
            _ = ticker.tick() => {
                task::block_in_place(|| module.update());
                writer.write_status(&protocol::blocks(&module))?;
            }
            line = clicks.next_line(), if clicks_open => match line {
                Ok(Some(line)) => {
                    if task::block_in_place(|| handle_click_line(&module, &line)) {
                        task::block_in_place(|| module.update());
                        writer.write_status(&protocol::blocks(&module))?;
                    }
                }
                Ok(None) => {
                    debug!("Click event stream closed");
                    clicks_open = false;
                }
                Err(e) => {
                    warn!("Failed to read click events: {e}");
                    clicks_open = false;
                }
            },
        }
    }
}
