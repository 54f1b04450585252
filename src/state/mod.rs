//! Application state management module.
//!
//! This module contains the navigation state machine:
//! - Main `State` struct holding the sources, active tab and scroll positions
//! - Key mapping and scroll bookkeeping types

mod navigation;

pub use navigation::{action_for_key, KeyOutcome, NavAction, ScrollAxis, ScrollPosition};

mod state_impl;

pub use state_impl::State;
