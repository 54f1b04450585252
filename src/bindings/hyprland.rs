//! Hyprland loader.
//!
//! Bindings are extracted from `bind = <modifiers>, <key>, <action>` lines of
//! the user's Hyprland configuration. Any failure (missing or unreadable
//! file, no matches, a malformed match) replaces the whole result with a
//! built-in table.

use super::{categorize, Binding, ExtractError};
use log::*;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Matches one bind statement. The action group runs to the end of the
/// line, so commas inside the action are kept.
///
pub const BIND_PATTERN: &str = r"bind\s*=\s*([^,]+),\s*([^,]+),\s*(.+)";

/// Relative to the home directory.
///
pub const DEFAULT_CONFIG_PATH: &str = ".config/hypr/hyprland.conf";

const FALLBACK: &[(&str, &str, &str)] = &[
    (
        "SUPER + Return",
        "Open Terminal (Alacritty)",
        "Applications",
    ),
    ("SUPER + Space", "Open Launcher (Rofi)", "Applications"),
    ("SUPER + E", "Open File Manager (Thunar)", "Applications"),
    ("SUPER + W", "Change Wallpaper", "Applications"),
    ("SUPER + /", "Show Keybinding Reference", "Applications"),
    ("SUPER + Q", "Close Active Window", "Window Management"),
    ("SUPER + M", "Exit Hyprland", "Window Management"),
    ("SUPER + T", "Toggle Floating Window", "Window Management"),
    ("SUPER + P", "Pseudotile (Dwindle)", "Window Management"),
    ("SUPER + J", "Toggle Split (Dwindle)", "Window Management"),
    (
        "SUPER + ↑/↓/←/→",
        "Move Focus Between Windows",
        "Navigation",
    ),
    ("SUPER + Mouse Drag", "Move/Resize Window", "Navigation"),
    ("SUPER + Mouse Wheel", "Switch Workspaces", "Navigation"),
    ("SUPER + 1-9,0", "Switch to Workspace N", "Workspaces"),
    (
        "SUPER + Shift + 1-9,0",
        "Move Window to Workspace N",
        "Workspaces",
    ),
    (
        "SUPER + S",
        "Toggle Special Workspace (Magic)",
        "Workspaces",
    ),
    (
        "SUPER + Shift + S",
        "Move to Special Workspace",
        "Workspaces",
    ),
    ("XF86AudioRaiseVolume", "Increase Volume (5%)", "System"),
    ("XF86AudioLowerVolume", "Decrease Volume (5%)", "System"),
    ("XF86AudioMute", "Toggle Audio Mute", "System"),
    ("XF86AudioMicMute", "Toggle Microphone Mute", "System"),
    (
        "XF86MonBrightnessUp/Down",
        "Adjust Screen Brightness",
        "System",
    ),
    (
        "XF86AudioNext/Prev",
        "Media Control (Next/Previous)",
        "System",
    ),
    (
        "XF86AudioPlay/Pause",
        "Media Control (Play/Pause)",
        "System",
    ),
];

/// Return the built-in table used whenever extraction fails.
///
pub fn fallback_bindings() -> Vec<Binding> {
    Binding::from_table(FALLBACK)
}

/// Returns the default configuration path or `None` if the home directory
/// could not be found.
///
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_PATH))
}

/// Load Hyprland bindings from `path`, falling back to the built-in table
/// on any failure. Never returns a partial result.
///
pub fn load(path: Option<&Path>) -> Vec<Binding> {
    let result = match path {
        Some(path) => extract(path),
        None => Err(ExtractError::NoPath),
    };
    match result {
        Ok(bindings) => {
            info!("Extracted {} Hyprland bindings.", bindings.len());
            bindings
        }
        Err(e) => {
            warn!("Using built-in Hyprland bindings: {}", e);
            fallback_bindings()
        }
    }
}

/// Read and parse the configuration file at `path`.
///
pub fn extract(path: &Path) -> Result<Vec<Binding>, ExtractError> {
    debug!("Reading Hyprland configuration from {}...", path.display());
    let contents = fs::read_to_string(path).map_err(|e| ExtractError::FileUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let bindings = parse(&contents)?;
    if bindings.is_empty() {
        return Err(ExtractError::ParseMismatch {
            path: path.to_path_buf(),
        });
    }
    Ok(bindings)
}

/// Return one record per bind statement found in `contents`, in file order.
///
/// The modifier and key groups may span lines when a statement is missing
/// its action; such a match fails the whole parse.
///
pub fn parse(contents: &str) -> Result<Vec<Binding>, ExtractError> {
    let re = Regex::new(BIND_PATTERN)?;
    re.captures_iter(contents)
        .map(|caps| {
            let modifiers = caps.get(1).map_or("", |m| m.as_str());
            let key = caps.get(2).map_or("", |m| m.as_str());
            if modifiers.contains('\n') || key.contains('\n') {
                return Err(ExtractError::MalformedBind {
                    statement: caps[0].lines().next().unwrap_or_default().to_string(),
                });
            }
            let action = caps.get(3).map_or("", |m| m.as_str().trim());
            Ok(Binding::new(
                format!("{} + {}", modifiers.trim(), key.trim()),
                action,
                categorize(action),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_well_formed_line() {
        let bindings = parse("bind = SUPER SHIFT, Q, killactive").unwrap();
        let expected = Binding::new("SUPER SHIFT + Q", "killactive", "Window Management");
        assert_eq!(bindings, vec![expected]);
    }

    #[test]
    fn parse_trims_whitespace() {
        let bindings = parse("bind=  SUPER ,   Return  ,   exec, alacritty   ").unwrap();
        assert_eq!(bindings[0].key, "SUPER + Return");
        assert_eq!(bindings[0].action, "exec, alacritty");
        assert_eq!(bindings[0].category, "Applications");
    }

    #[test]
    fn parse_keeps_commas_in_action() {
        let bindings = parse("bind = SUPER, 1, workspace, 1").unwrap();
        assert_eq!(bindings[0].action, "workspace, 1");
        assert_eq!(bindings[0].category, "Workspaces");

        let line =
            "bind = , XF86AudioRaiseVolume, exec, wpctl set-volume @DEFAULT_AUDIO_SINK@ 5%+";
        let bindings = parse(line).unwrap();
        assert_eq!(
            bindings[0].action,
            "exec, wpctl set-volume @DEFAULT_AUDIO_SINK@ 5%+"
        );
    }

    #[test]
    fn parse_multiple_lines_in_order() {
        let contents = "\
# Programs
$terminal = alacritty
bind = SUPER, Return, exec, $terminal
bind = SUPER, Q, killactive,
bind = SUPER, V, togglefloating,

bindm = SUPER, mouse:272, movewindow
bind = SUPER SHIFT, 2, movetoworkspace, 2
bind = SUPER, P, pseudo
";
        let bindings = parse(contents).unwrap();
        let keys: Vec<&str> = bindings.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "SUPER + Return",
                "SUPER + Q",
                "SUPER + V",
                "SUPER SHIFT + 2",
                "SUPER + P"
            ]
        );
        let categories: Vec<&str> = bindings.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Applications",
                "Window Management",
                "Window Management",
                "Workspaces",
                "General"
            ]
        );
    }

    #[test]
    fn parse_no_matches() {
        let bindings = parse("general {\n    gaps_in = 5\n}\n").unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn parse_rejects_statement_without_action() {
        let result = parse("bind = SUPER, Q\nbind = SUPER, W, exec, foo\n");
        match result {
            Err(ExtractError::MalformedBind { statement }) => {
                assert_eq!(statement, "bind = SUPER, Q")
            }
            other => panic!("expected MalformedBind, got {:?}", other),
        }
    }

    #[test]
    fn load_file_with_malformed_bind_uses_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = SUPER, Return, exec, alacritty").unwrap();
        writeln!(file, "bind = SUPER, Q").unwrap();
        writeln!(file, "bind = SUPER, W, exec, foo").unwrap();
        assert!(matches!(
            extract(file.path()),
            Err(ExtractError::MalformedBind { .. })
        ));
        let bindings = load(Some(file.path()));
        assert_eq!(bindings.len(), 24);
        assert_eq!(bindings[0].key, "SUPER + Return");
        assert_eq!(bindings[0].action, "Open Terminal (Alacritty)");
    }

    #[test]
    fn fallback_table_content() {
        let fallback = fallback_bindings();
        assert_eq!(fallback.len(), 24);
        let count = |category: &str| fallback.iter().filter(|b| b.category == category).count();
        assert_eq!(count("Applications"), 5);
        assert_eq!(count("Window Management"), 5);
        assert_eq!(count("Navigation"), 3);
        assert_eq!(count("Workspaces"), 4);
        assert_eq!(count("System"), 7);
        assert_eq!(fallback[0].key, "SUPER + Return");
        assert_eq!(fallback[0].action, "Open Terminal (Alacritty)");
        assert_eq!(fallback[23].key, "XF86AudioPlay/Pause");
        assert_eq!(fallback[23].action, "Media Control (Play/Pause)");
    }

    #[test]
    fn load_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let bindings = load(Some(dir.path().join("hyprland.conf").as_path()));
        assert_eq!(bindings.len(), 24);
        assert_eq!(bindings[23].key, "XF86AudioPlay/Pause");
        assert_eq!(bindings[23].category, "System");
    }

    #[test]
    fn load_without_path_uses_fallback() {
        assert_eq!(load(None), fallback_bindings());
    }

    #[test]
    fn load_file_without_binds_uses_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "monitor = ,preferred,auto,1").unwrap();
        assert_eq!(load(Some(file.path())), fallback_bindings());
        assert!(matches!(
            extract(file.path()),
            Err(ExtractError::ParseMismatch { .. })
        ));
    }

    #[test]
    fn load_unreadable_file_uses_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x62, 0x69, 0x6e, 0x64, 0xff, 0xfe]).unwrap();
        assert!(matches!(
            extract(file.path()),
            Err(ExtractError::FileUnavailable { .. })
        ));
        assert_eq!(load(Some(file.path())), fallback_bindings());
    }

    #[test]
    fn load_directory_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(Some(dir.path())), fallback_bindings());
    }

    #[test]
    fn load_extracts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = SUPER SHIFT, Q, killactive").unwrap();
        writeln!(file, "bind = SUPER, F, fullscreen, 0").unwrap();
        let bindings = load(Some(file.path()));
        assert_eq!(
            bindings,
            vec![
                Binding::new("SUPER SHIFT + Q", "killactive", "Window Management"),
                Binding::new("SUPER + F", "fullscreen, 0", "Window Management"),
            ]
        );
    }
}
