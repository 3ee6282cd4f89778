//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum.  Two sources feed it: a
//! non-blocking drain used by the synchronous `alive()` loop, and a
//! background task that forwards events over a channel for the async driver.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Focus and paste events are not used.
    pub fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Read every event already queued by the terminal without blocking.
pub fn drain_pending() -> std::io::Result<Vec<AppEvent>> {
    let mut out = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(ev) = AppEvent::from_crossterm(event::read()?) {
            out.push(ev);
        }
    }
    Ok(out)
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.  Only real input is sent; `poll_rate` just
/// bounds how long the task takes to notice the receiver is gone.
pub fn spawn_event_reader(poll_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    // crossterm's poll blocks, so keep it off the async workers.
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(poll_rate).unwrap_or(false) {
                continue;
            }
            let Some(ev) = event::read().ok().and_then(AppEvent::from_crossterm) else {
                continue;
            };
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    rx
}
