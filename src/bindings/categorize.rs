//! Keyword-based categorization of extracted Hyprland actions.

/// Category returned when no rule matches.
///
pub const DEFAULT_CATEGORY: &str = "General";

/// Ordered `(keywords, category)` rules. The first rule with any keyword
/// contained in the lower-cased action wins.
///
const RULES: &[(&[&str], &str)] = &[
    (&["exec", "alacritty", "rofi", "firefox"], "Applications"),
    (
        &["kill", "close", "fullscreen", "float"],
        "Window Management",
    ),
    (&["workspace", "move"], "Workspaces"),
    (&["volume", "brightness"], "System"),
];

/// Return the display category for a Hyprland action.
///
pub fn categorize(action: &str) -> &'static str {
    let action = action.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| action.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
