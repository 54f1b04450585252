use super::Frame;
use crate::bindings::CategoryGroup;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Widest the key column gets; longer keys are truncated.
///
const KEY_COLUMN_MAX: usize = 32;
const ROW_INDENT: &str = "  ";
const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '…';

/// Render the active source's bindings and report its extents to state.
///
pub fn bindings(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let (title, lines) = match state.active_source() {
        Some(source) => (source.title(), build_lines(&source.groups(), &theme)),
        None => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme))
        .title(Span::styled(
            format!(" {} ", title),
            styling::title_style(&theme),
        ));
    let inner = block.inner(size);

    let content_height = lines.len();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let page_height = inner.height as usize;
    state.set_active_extents(
        (0, content_height, page_height),
        (0, content_width, inner.width as usize),
    );
    let position = state.active_scroll();

    let paragraph = Paragraph::new(lines).block(block).scroll((
        to_u16(position.vertical.value),
        to_u16(position.horizontal.value),
    ));
    frame.render_widget(paragraph, size);

    if content_height > page_height && size.width > 0 {
        let scrollbar_area = Rect::new(size.x + size.width - 1, inner.y, 1, inner.height);
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .style(styling::muted_text_style(&theme))
            .begin_symbol(None)
            .end_symbol(None);
        let mut scrollbar_state = ScrollbarState::new(position.vertical.max_value() + 1)
            .position(position.vertical.value);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// Lay out grouped bindings as display lines: a header per category, one
/// row per binding, and a blank line between groups.
///
pub fn build_lines(groups: &[CategoryGroup], theme: &Theme) -> Vec<Line<'static>> {
    let key_width = key_column_width(groups);
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            group.category.to_string(),
            styling::category_style(theme),
        )));
        for binding in &group.bindings {
            lines.push(Line::from(vec![
                Span::raw(ROW_INDENT),
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate(&binding.key, key_width),
                        width = key_width
                    ),
                    styling::key_style(theme),
                ),
                Span::raw(COLUMN_GAP),
                Span::styled(binding.action.clone(), styling::action_style(theme)),
            ]));
        }
    }
    lines
}

/// Width of the widest key, capped at `KEY_COLUMN_MAX`.
///
fn key_column_width(groups: &[CategoryGroup]) -> usize {
    groups
        .iter()
        .flat_map(|group| group.bindings.iter())
        .map(|binding| binding.key.chars().count())
        .max()
        .unwrap_or(0)
        .min(KEY_COLUMN_MAX)
}

/// Shorten `text` to `width` characters, ending in an ellipsis when cut.
///
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
