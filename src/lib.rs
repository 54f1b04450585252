//! Keybinding reference panel.
//!
//! Shows Hyprland, Zellij and Neovim LSP keybindings grouped by category in
//! a tabbed terminal panel with vim-style navigation.

pub mod app;
pub mod bindings;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
