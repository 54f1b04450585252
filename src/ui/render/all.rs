use super::{bindings, footer, tabs, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Render the whole panel: tabs, bindings body and footer.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    frame.render_widget(
        Block::default().style(styling::background_style(state.theme())),
        size,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and tabs
            Constraint::Min(3),    // Bindings
            Constraint::Length(1), // Footer
        ])
        .split(size);

    tabs(frame, rows[0], state);
    bindings(frame, rows[1], state);
    footer(frame, rows[2], state);
}
