use crate::state::{KeyOutcome, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyEvent},
};
use log::*;
use std::time::Duration;

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 250;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Polls terminal events on the calling thread.
///
pub struct Handler {
    tick_rate: Duration,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    pub fn new() -> Self {
        Handler {
            tick_rate: Duration::from_millis(TICK_RATE_IN_MS),
        }
    }

    /// Wait up to one tick for the next key event. Anything else, including
    /// resizes, is reported as a tick so the caller redraws.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        if event::poll(self.tick_rate)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                return Ok(Event::Input(key));
            }
        }
        Ok(Event::Tick)
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        if let Event::Input(key) = self.next()? {
            match state.handle_key(&key) {
                KeyOutcome::Close => {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                KeyOutcome::Handled => (),
                KeyOutcome::NotHandled => trace!("Ignoring terminal event '{:?}'.", key),
            }
        }
        Ok(true)
    }
}
