use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the base style painted under the whole panel.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default().bg(theme.background.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for blocks.
///
pub fn title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.title.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for category headers.
///
pub fn category_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.category.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for key combinations.
///
pub fn key_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.key.to_color())
        .bg(theme.surface.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for action descriptions.
///
pub fn action_style(theme: &Theme) -> Style {
    Style::default().fg(theme.action.to_color())
}

/// Return the style for inactive tabs.
///
pub fn tab_style(theme: &Theme) -> Style {
    Style::default().fg(theme.tab.to_color())
}

/// Return the style for the active tab.
///
pub fn active_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.tab_active.to_color())
        .bg(theme.surface.to_color())
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Return the style for hints and status text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.muted.to_color())
}
