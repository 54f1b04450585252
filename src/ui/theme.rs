use ratatui::style::Color;

/// Theme color palette defining all colors used in the panel.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,

    // Surfaces
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Text colors
    pub title: ColorSpec,
    pub category: ColorSpec,
    pub key: ColorSpec,
    pub action: ColorSpec,
    pub muted: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub tab: ColorSpec,
    pub tab_active: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_macchiato()
    }
}

impl Theme {
    /// Catppuccin Macchiato theme.
    ///
    pub fn catppuccin_macchiato() -> Self {
        Theme {
            name: "catppuccin-macchiato".to_string(),
            background: ColorSpec::rgb(36, 39, 58),
            surface: ColorSpec::rgb(54, 58, 79),
            title: ColorSpec::rgb(202, 211, 245),
            category: ColorSpec::rgb(198, 160, 246),
            key: ColorSpec::rgb(245, 169, 127),
            action: ColorSpec::rgb(202, 211, 245),
            muted: ColorSpec::rgb(110, 115, 141),
            border_active: ColorSpec::rgb(198, 160, 246),
            border_normal: ColorSpec::rgb(73, 77, 100),
            tab: ColorSpec::rgb(184, 192, 224),
            tab_active: ColorSpec::rgb(202, 211, 245),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            background: ColorSpec::rgb(30, 30, 46),
            surface: ColorSpec::rgb(49, 50, 68),
            title: ColorSpec::rgb(205, 214, 244),
            category: ColorSpec::rgb(203, 166, 247),
            key: ColorSpec::rgb(250, 179, 135),
            action: ColorSpec::rgb(205, 214, 244),
            muted: ColorSpec::rgb(108, 112, 134),
            border_active: ColorSpec::rgb(203, 166, 247),
            border_normal: ColorSpec::rgb(69, 71, 90),
            tab: ColorSpec::rgb(186, 194, 222),
            tab_active: ColorSpec::rgb(205, 214, 244),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            background: ColorSpec::rgb(26, 27, 38),
            surface: ColorSpec::rgb(36, 40, 59),
            title: ColorSpec::rgb(192, 202, 245),
            category: ColorSpec::rgb(187, 154, 247),
            key: ColorSpec::rgb(255, 158, 100),
            action: ColorSpec::rgb(192, 202, 245),
            muted: ColorSpec::rgb(86, 95, 137),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
            tab: ColorSpec::rgb(169, 177, 214),
            tab_active: ColorSpec::rgb(192, 202, 245),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            background: ColorSpec::rgb(25, 23, 36),
            surface: ColorSpec::rgb(31, 29, 46),
            title: ColorSpec::rgb(224, 222, 244),
            category: ColorSpec::rgb(196, 167, 231),
            key: ColorSpec::rgb(246, 193, 119),
            action: ColorSpec::rgb(224, 222, 244),
            muted: ColorSpec::rgb(110, 106, 134),
            border_active: ColorSpec::rgb(235, 188, 186),
            border_normal: ColorSpec::rgb(38, 35, 58),
            tab: ColorSpec::rgb(144, 140, 170),
            tab_active: ColorSpec::rgb(224, 222, 244),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catppuccin-macchiato" => Some(Self::catppuccin_macchiato()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "catppuccin-macchiato".to_string(),
            "catppuccin-mocha".to_string(),
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
        ]
    }
}
