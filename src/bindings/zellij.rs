//! Zellij bindings (tmux-style `Ctrl + A` prefix layout).

use super::Binding;

const BINDINGS: &[(&str, &str, &str)] = &[
    ("Ctrl + A", "Enter Command Mode", "Mode"),
    ("Ctrl + A, C", "New Tab", "Tabs"),
    ("Ctrl + A, &", "Close Tab", "Tabs"),
    ("Ctrl + A, 1-9", "Go to Tab N", "Tabs"),
    ("Ctrl + A, %", "Split Right", "Panes"),
    ("Ctrl + A, \"", "Split Down", "Panes"),
    ("Ctrl + A, X", "Close Pane", "Panes"),
    ("Ctrl + A, H/J/K/L", "Navigate Panes", "Panes"),
    ("Ctrl + A, D", "Detach Session", "Session"),
    ("Ctrl + A, [", "Scroll Mode", "Scrolling"),
];

pub fn bindings() -> Vec<Binding> {
    Binding::from_table(BINDINGS)
}
