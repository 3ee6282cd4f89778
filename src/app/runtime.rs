//! Async driver: the same cooperative loop as `while ui.alive()`, on tokio.
//!
//! Terminal input arrives from a background reader over a channel; a
//! `tokio::time::interval` drives the caller's tick closure.  Everything that
//! touches the [`ChibiUi`] runs on the awaiting task.

use std::time::Duration;

use tokio::sync::mpsc;

use super::event::{spawn_event_reader, AppEvent};
use super::handle::ChibiUi;
use crate::error::Result;

/// Run until the UI closes, calling `on_tick` every `tick_rate`.
///
/// `on_tick` is where the caller polls buttons and reads values; it may call
/// [`ChibiUi::close`] to stop the loop.
pub async fn run<F>(ui: &mut ChibiUi, tick_rate: Duration, mut on_tick: F) -> Result<()>
where
    F: FnMut(&mut ChibiUi),
{
    let mut events = if ui.is_headless() {
        None
    } else {
        Some(spawn_event_reader(tick_rate))
    };
    let mut ticker = tokio::time::interval(tick_rate);

    while ui.is_alive() {
        // Draw first so input always lands on a current frame.
        ui.draw()?;

        tokio::select! {
            biased;

            Some(event) = next_event(&mut events) => {
                ui.handle_event(event);
                // Drain whatever else is queued before redrawing.
                if let Some(rx) = events.as_mut() {
                    while let Ok(ev) = rx.try_recv() {
                        ui.handle_event(ev);
                    }
                }
            }

            _ = ticker.tick() => on_tick(ui),
        }
    }

    Ok(())
}

async fn next_event(events: &mut Option<mpsc::UnboundedReceiver<AppEvent>>) -> Option<AppEvent> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
