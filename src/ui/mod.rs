//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Panel layout (title, tabs, bindings body, footer)
//! - Theme management
//! - Styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::{build_lines, render};
pub use theme::{ColorSpec, Theme};
