use crate::bindings::Source;
use crate::config::{Config, DEFAULT_HORIZONTAL_STEP, DEFAULT_SCROLL_STEP};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use crossterm::event::KeyEvent;
use log::*;

use super::navigation::{action_for_key, KeyOutcome, NavAction, ScrollPosition};

/// Houses the sources on display and the navigation state over them.
///
/// Scroll positions are kept per source. Bounds come from the renderer via
/// `set_active_extents`; key presses only ever clamp against the latest
/// reported bounds.
pub struct State {
    sources: Vec<Source>,
    active_source: usize,
    scroll: Vec<ScrollPosition>,
    scroll_step: usize,
    horizontal_step: usize,
    theme: Theme,
    log: LogBuffer,
}

impl Default for State {
    fn default() -> Self {
        State {
            sources: vec![],
            active_source: 0,
            scroll: vec![],
            scroll_step: DEFAULT_SCROLL_STEP,
            horizontal_step: DEFAULT_HORIZONTAL_STEP,
            theme: Theme::default(),
            log: LogBuffer::new(),
        }
    }
}

impl State {
    /// Return new instance starting on the first source at zero offset.
    ///
    pub fn new(sources: Vec<Source>, config: &Config) -> Self {
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using '{}'.",
                config.theme_name,
                Theme::default().name
            );
            Theme::default()
        });
        let scroll = vec![ScrollPosition::default(); sources.len()];
        State {
            sources,
            active_source: 0,
            scroll,
            scroll_step: config.scroll_step,
            horizontal_step: config.horizontal_step,
            theme,
            log: LogBuffer::new(),
        }
    }

    pub fn with_log(mut self, log: LogBuffer) -> Self {
        self.log = log;
        self
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn active_source_index(&self) -> usize {
        self.active_source
    }

    pub fn active_source(&self) -> Option<&Source> {
        self.sources.get(self.active_source)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    /// Return the scroll position of the source at `index`.
    ///
    pub fn scroll_position(&self, index: usize) -> Option<&ScrollPosition> {
        self.scroll.get(index)
    }

    /// Return the scroll position of the active source.
    ///
    pub fn active_scroll(&self) -> ScrollPosition {
        self.scroll
            .get(self.active_source)
            .copied()
            .unwrap_or_default()
    }

    /// Record the content bounds of the active source as laid out by the
    /// renderer: `(lower, upper, page_size)` per axis.
    ///
    pub fn set_active_extents(
        &mut self,
        vertical: (usize, usize, usize),
        horizontal: (usize, usize, usize),
    ) -> &mut Self {
        if let Some(position) = self.scroll.get_mut(self.active_source) {
            position.vertical.set_extent(vertical.0, vertical.1, vertical.2);
            position
                .horizontal
                .set_extent(horizontal.0, horizontal.1, horizontal.2);
        }
        self
    }

    /// Offer a key press to the state machine.
    ///
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match action_for_key(event) {
            Some(action) => {
                debug!("Processing navigation action {:?}...", action);
                self.apply(action)
            }
            None => KeyOutcome::NotHandled,
        }
    }

    /// Apply a navigation action. Actions at a bound are consumed no-ops.
    ///
    pub fn apply(&mut self, action: NavAction) -> KeyOutcome {
        match action {
            NavAction::Close => return KeyOutcome::Close,
            NavAction::PreviousSource => {
                self.previous_source();
            }
            NavAction::NextSource => {
                self.next_source();
            }
            NavAction::JumpToSource(index) => {
                self.select_source(index);
            }
            NavAction::ScrollDown => {
                let step = self.scroll_step;
                self.with_active_scroll(|p| p.vertical.forward(step));
            }
            NavAction::ScrollUp => {
                let step = self.scroll_step;
                self.with_active_scroll(|p| p.vertical.back(step));
            }
            NavAction::HalfPageDown => {
                self.with_active_scroll(|p| p.vertical.forward(p.vertical.half_page()));
            }
            NavAction::HalfPageUp => {
                self.with_active_scroll(|p| p.vertical.back(p.vertical.half_page()));
            }
            NavAction::Top => {
                self.with_active_scroll(|p| p.vertical.to_start());
            }
            NavAction::Bottom => {
                self.with_active_scroll(|p| p.vertical.to_end());
            }
            NavAction::ScrollLeft => {
                let step = self.horizontal_step;
                self.with_active_scroll(|p| p.horizontal.back(step));
            }
            NavAction::ScrollRight => {
                let step = self.horizontal_step;
                self.with_active_scroll(|p| p.horizontal.forward(step));
            }
        }
        KeyOutcome::Handled
    }

    pub fn previous_source(&mut self) -> &mut Self {
        if self.active_source > 0 {
            self.active_source -= 1;
        }
        self
    }

    pub fn next_source(&mut self) -> &mut Self {
        if self.active_source + 1 < self.sources.len() {
            self.active_source += 1;
        }
        self
    }

    /// Make `index` the active source if it exists.
    ///
    pub fn select_source(&mut self, index: usize) -> &mut Self {
        if index < self.sources.len() {
            self.active_source = index;
        }
        self
    }

    fn with_active_scroll(&mut self, f: impl FnOnce(&mut ScrollPosition)) {
        if let Some(position) = self.scroll.get_mut(self.active_source) {
            f(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{Binding, SourceKind};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn state() -> State {
        let sources = vec![
            Source::new(
                SourceKind::Hyprland,
                vec![Binding::new("SUPER + Q", "killactive", "Window Management")],
            ),
            Source::new(
                SourceKind::Zellij,
                vec![Binding::new("Ctrl + A", "Enter Command Mode", "Mode")],
            ),
            Source::new(
                SourceKind::NeovimLsp,
                vec![Binding::new("gd", "Go to Definition", "Navigation")],
            ),
        ];
        State::new(sources, &Config::default())
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn press(state: &mut State, c: char, times: usize) {
        for _ in 0..times {
            assert_eq!(state.handle_key(&key(c)), KeyOutcome::Handled);
        }
    }

    #[test]
    fn starts_on_first_source_at_top() {
        let state = state();
        assert_eq!(state.active_source_index(), 0);
        assert_eq!(state.active_scroll(), ScrollPosition::default());
        assert_eq!(state.sources().len(), 3);
    }

    #[test]
    fn previous_source_is_noop_at_first() {
        let mut state = state();
        press(&mut state, 'H', 1);
        assert_eq!(state.active_source_index(), 0);
    }

    #[test]
    fn next_source_is_noop_at_last() {
        let mut state = state();
        press(&mut state, 'L', 5);
        assert_eq!(state.active_source_index(), 2);
        press(&mut state, 'H', 1);
        assert_eq!(state.active_source_index(), 1);
    }

    #[test]
    fn digits_jump_when_source_exists() {
        let mut state = state();
        press(&mut state, '3', 1);
        assert_eq!(state.active_source_index(), 2);
        press(&mut state, '1', 1);
        assert_eq!(state.active_source_index(), 0);
        press(&mut state, '4', 1);
        assert_eq!(state.active_source_index(), 0);
        press(&mut state, '9', 1);
        assert_eq!(state.active_source_index(), 0);
    }

    #[test]
    fn scroll_down_clamps_to_max() {
        let mut state = state();
        state.set_active_extents((0, 100, 20), (0, 0, 0));
        press(&mut state, 'j', 1);
        assert_eq!(state.active_scroll().vertical.value, 3);
        press(&mut state, 'j', 50);
        assert_eq!(state.active_scroll().vertical.value, 80);
    }

    #[test]
    fn scroll_up_clamps_to_lower() {
        let mut state = state();
        state.set_active_extents((0, 100, 20), (0, 0, 0));
        press(&mut state, 'j', 2);
        press(&mut state, 'k', 10);
        assert_eq!(state.active_scroll().vertical.value, 0);
        press(&mut state, 'g', 1);
        press(&mut state, 'k', 3);
        assert_eq!(state.active_scroll().vertical.value, 0);
    }

    #[test]
    fn half_page_and_jumps() {
        let mut state = state();
        state.set_active_extents((0, 100, 20), (0, 0, 0));
        press(&mut state, 'd', 1);
        assert_eq!(state.active_scroll().vertical.value, 10);
        press(&mut state, 'G', 1);
        assert_eq!(state.active_scroll().vertical.value, 80);
        press(&mut state, 'd', 1);
        assert_eq!(state.active_scroll().vertical.value, 80);
        press(&mut state, 'u', 1);
        assert_eq!(state.active_scroll().vertical.value, 70);
        press(&mut state, 'g', 1);
        assert_eq!(state.active_scroll().vertical.value, 0);
    }

    #[test]
    fn horizontal_scroll_clamps() {
        let mut state = state();
        state.set_active_extents((0, 0, 0), (0, 50, 30));
        press(&mut state, 'l', 1);
        assert_eq!(state.active_scroll().horizontal.value, 8);
        press(&mut state, 'l', 5);
        assert_eq!(state.active_scroll().horizontal.value, 20);
        press(&mut state, 'h', 1);
        assert_eq!(state.active_scroll().horizontal.value, 12);
        press(&mut state, 'h', 5);
        assert_eq!(state.active_scroll().horizontal.value, 0);
    }

    #[test]
    fn scroll_before_first_layout_stays_at_zero() {
        let mut state = state();
        press(&mut state, 'j', 3);
        press(&mut state, 'G', 1);
        assert_eq!(state.active_scroll().vertical.value, 0);
    }

    #[test]
    fn scroll_positions_are_per_source() {
        let mut state = state();
        state.set_active_extents((0, 100, 20), (0, 0, 0));
        press(&mut state, 'G', 1);
        press(&mut state, 'L', 1);
        assert_eq!(state.active_scroll().vertical.value, 0);
        press(&mut state, 'H', 1);
        assert_eq!(state.active_scroll().vertical.value, 80);
        assert_eq!(state.scroll_position(1).map(|p| p.vertical.value), Some(0));
    }

    #[test]
    fn close_keys() {
        let mut state = state();
        assert_eq!(state.handle_key(&key('q')), KeyOutcome::Close);
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            KeyOutcome::Close
        );
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Close
        );
    }

    #[test]
    fn unmapped_keys_are_not_handled() {
        let mut state = state();
        assert_eq!(state.handle_key(&key('x')), KeyOutcome::NotHandled);
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            KeyOutcome::NotHandled
        );
        assert_eq!(state.active_source_index(), 0);
    }

    #[test]
    fn custom_scroll_step() {
        let config = Config {
            scroll_step: 5,
            ..Config::default()
        };
        let mut state = State::new(state().sources().to_vec(), &config);
        state.set_active_extents((0, 100, 20), (0, 0, 0));
        press(&mut state, 'j', 1);
        assert_eq!(state.active_scroll().vertical.value, 5);
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config {
            theme_name: "no-such-theme".to_string(),
            ..Config::default()
        };
        let state = State::new(vec![], &config);
        assert_eq!(state.theme().name, Theme::default().name);
    }

    #[test]
    fn empty_state_handles_keys() {
        let mut state = State::default();
        assert_eq!(state.handle_key(&key('j')), KeyOutcome::Handled);
        assert_eq!(state.handle_key(&key('L')), KeyOutcome::Handled);
        assert!(state.active_source().is_none());
    }
}
