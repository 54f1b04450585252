//! Navigation-related state types.
//!
//! This module maps key presses to navigation actions and holds the scroll
//! bookkeeping each source keeps between key presses.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Specifying the navigation actions a key press can trigger.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavAction {
    Close,
    PreviousSource,
    NextSource,
    JumpToSource(usize),
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    Top,
    Bottom,
    ScrollLeft,
    ScrollRight,
}

/// Result of offering a key press to the state machine.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyOutcome {
    /// Consumed; no further dispatch
    Handled,
    /// Not a navigation key
    NotHandled,
    /// Consumed; the panel should close
    Close,
}

/// Return the action bound to a key press, if any. Only presses count;
/// repeat and release events are ignored.
///
pub fn action_for_key(event: &KeyEvent) -> Option<NavAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match (event.code, event.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(NavAction::Close),
        (KeyCode::Esc, _) => Some(NavAction::Close),
        // Uppercase letters may arrive with or without SHIFT set
        (KeyCode::Char(c), modifiers) if modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            action_for_char(c)
        }
        _ => None,
    }
}

fn action_for_char(c: char) -> Option<NavAction> {
    match c {
        'q' => Some(NavAction::Close),
        'H' => Some(NavAction::PreviousSource),
        'L' => Some(NavAction::NextSource),
        'j' => Some(NavAction::ScrollDown),
        'k' => Some(NavAction::ScrollUp),
        'd' => Some(NavAction::HalfPageDown),
        'u' => Some(NavAction::HalfPageUp),
        'g' => Some(NavAction::Top),
        'G' => Some(NavAction::Bottom),
        'h' => Some(NavAction::ScrollLeft),
        'l' => Some(NavAction::ScrollRight),
        '1'..='9' => c
            .to_digit(10)
            .map(|digit| NavAction::JumpToSource(digit as usize - 1)),
        _ => None,
    }
}

/// One scroll dimension: the committed offset plus the bounds last reported
/// by the renderer.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ScrollAxis {
    pub value: usize,
    pub lower: usize,
    pub upper: usize,
    pub page_size: usize,
}

impl ScrollAxis {
    /// Largest reachable offset: `upper - page_size`, never below `lower`.
    ///
    pub fn max_value(&self) -> usize {
        self.upper.saturating_sub(self.page_size).max(self.lower)
    }

    /// Record new bounds and re-clamp the current offset.
    ///
    pub fn set_extent(&mut self, lower: usize, upper: usize, page_size: usize) {
        self.lower = lower;
        self.upper = upper;
        self.page_size = page_size;
        self.set_value(self.value);
    }

    pub fn set_value(&mut self, value: usize) {
        self.value = value.clamp(self.lower, self.max_value());
    }

    pub fn forward(&mut self, amount: usize) {
        self.set_value(self.value.saturating_add(amount));
    }

    pub fn back(&mut self, amount: usize) {
        self.set_value(self.value.saturating_sub(amount));
    }

    pub fn half_page(&self) -> usize {
        (self.page_size / 2).max(1)
    }

    pub fn to_start(&mut self) {
        self.set_value(self.lower);
    }

    pub fn to_end(&mut self) {
        self.set_value(self.max_value());
    }
}

/// Scroll position of one source's content.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ScrollPosition {
    pub vertical: ScrollAxis,
    pub horizontal: ScrollAxis,
}
