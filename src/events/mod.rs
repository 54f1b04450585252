//! Event handling module.
//!
//! Terminal events are polled synchronously on the main thread and fed to
//! the navigation state machine.

pub mod terminal;
