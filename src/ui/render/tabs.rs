use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

const BLOCK_TITLE: &str = " Keybinding Reference ";

/// Render the title bar and source tabs according to state.
///
pub fn tabs(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::title_style(theme)));

    let titles: Vec<Line> = state
        .sources()
        .iter()
        .enumerate()
        .map(|(i, source)| Line::from(format!(" {} {} ", i + 1, source.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(state.active_source_index())
        .style(styling::tab_style(theme))
        .highlight_style(styling::active_tab_style(theme))
        .divider(Span::styled("│", styling::muted_text_style(theme)));

    frame.render_widget(tabs, size);
}
