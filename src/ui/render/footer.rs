use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Navigation keys shown in the footer as `(keys, description)`.
///
const HINTS: &[(&str, &str)] = &[
    ("H/L", "tab"),
    ("1-9", "jump"),
    ("j/k", "scroll"),
    ("d/u", "half page"),
    ("g/G", "top/bottom"),
    ("h/l", "pan"),
    ("q/Esc", "close"),
];

/// Builds a footer text string from `(keys, description)` pairs.
///
pub fn build_footer_text(hints: &[(&str, &str)]) -> String {
    hints
        .iter()
        .map(|(keys, description)| format!(" {}: {}", keys, description))
        .collect::<Vec<String>>()
        .join(",")
}

/// Render footer with key hints on the left and the latest log entry on
/// the right.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size);

    let hints = Paragraph::new(Line::from(Span::styled(
        build_footer_text(HINTS),
        styling::muted_text_style(theme),
    )));
    frame.render_widget(hints, chunks[0]);

    if let Some(entry) = state.log().latest() {
        let status = Paragraph::new(Line::from(Span::styled(
            format!("{} ", entry),
            styling::muted_text_style(theme),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(status, chunks[1]);
    }
}
