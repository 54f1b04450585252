//! Keybinding data model and source loaders.
//!
//! This module contains everything the panel knows about keybindings:
//! - `Binding` records and the `Source` collections they belong to
//! - Loaders for Hyprland (file extraction with fallback), Zellij and Neovim LSP
//! - The action categorizer and the category grouping used for display

mod categorize;
mod error;
mod group;
pub mod hyprland;
mod lsp;
mod zellij;

pub use categorize::categorize;
pub use error::ExtractError;
pub use group::{group_by_category, CategoryGroup};

use crate::config::Config;
use log::*;

/// A single keyboard shortcut as displayed in the panel.
///
/// All three fields are free-form display text. Records are not required
/// to be unique within a source.
///
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Binding {
    pub key: String,
    pub action: String,
    pub category: String,
}

impl Binding {
    pub fn new(
        key: impl Into<String>,
        action: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Binding {
            key: key.into(),
            action: action.into(),
            category: category.into(),
        }
    }

    /// Build owned records from a static `(key, action, category)` table.
    ///
    pub fn from_table(table: &[(&str, &str, &str)]) -> Vec<Binding> {
        table
            .iter()
            .map(|(key, action, category)| Binding::new(*key, *action, *category))
            .collect()
    }
}

/// Specifying the supported tools.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SourceKind {
    Hyprland,
    Zellij,
    NeovimLsp,
}

impl SourceKind {
    /// Return the tab title for this tool.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            SourceKind::Hyprland => "Hyprland",
            SourceKind::Zellij => "Zellij",
            SourceKind::NeovimLsp => "Neovim LSP",
        }
    }
}

/// A named, immutable collection of bindings for one tool.
///
#[derive(Clone, Debug)]
pub struct Source {
    pub kind: SourceKind,
    pub bindings: Vec<Binding>,
}

impl Source {
    pub fn new(kind: SourceKind, bindings: Vec<Binding>) -> Self {
        Source { kind, bindings }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Group this source's bindings for display.
    ///
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.bindings)
    }
}

/// Construct all sources in tab order. Never fails: the Hyprland loader
/// substitutes its fallback table when extraction is not possible.
///
pub fn load_sources(config: &Config) -> Vec<Source> {
    let hyprland_path = config.hyprland_config_path();
    let sources = vec![
        Source::new(
            SourceKind::Hyprland,
            hyprland::load(hyprland_path.as_deref()),
        ),
        Source::new(SourceKind::Zellij, zellij::bindings()),
        Source::new(SourceKind::NeovimLsp, lsp::bindings()),
    ];
    for source in &sources {
        debug!(
            "Loaded {} {} bindings.",
            source.bindings.len(),
            source.title()
        );
    }
    sources
}
