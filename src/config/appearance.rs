//! Appearance configuration
//!
//! The color scheme is the only recognized appearance option. It is parsed
//! into an enum once, at load time; the TUI resolves it into a typed theme.

/// Application color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    /// Follow the terminal's own colors
    #[default]
    System,
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [ColorScheme::System, ColorScheme::Light, ColorScheme::Dark];

    /// Parse from config text. Unknown values fall back to `System`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Config file spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label used in the settings page
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "Follow System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Light => Self::System,
            Self::Dark => Self::Light,
        }
    }
}
