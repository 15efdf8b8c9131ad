// Theme - typed colors resolved from the configured color scheme
//
// Every render function takes its colors from here; nothing in the
// component code names a color directly.

use crate::config::ColorScheme;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub hint: Color,

    // Navigation tabs
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive: Color,

    // Content
    pub heading: Color,
    pub label: Color,
    pub dim: Color,
    pub error: Color,
    pub section: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Toast border
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::system()
    }
}

impl Theme {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::System => Self::system(),
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// Terminal's own background and foreground, named accent colors
    pub fn system() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            border: Color::Gray,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            hint: Color::DarkGray,

            tab_active_bg: Color::Cyan,
            tab_active_fg: Color::Black,
            tab_inactive: Color::Gray,

            heading: Color::Cyan,
            label: Color::Gray,
            dim: Color::DarkGray,
            error: Color::Red,
            section: Color::Blue,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            highlight: Color::Yellow,
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            border: Color::Rgb(88, 91, 112),
            border_type: BorderType::Rounded,

            title: Color::Rgb(137, 180, 250),
            status_bar: Color::Rgb(166, 227, 161),
            hint: Color::Rgb(127, 132, 156),

            tab_active_bg: Color::Rgb(137, 180, 250),
            tab_active_fg: Color::Rgb(30, 30, 46),
            tab_inactive: Color::Rgb(166, 173, 200),

            heading: Color::Rgb(203, 166, 247),
            label: Color::Rgb(166, 173, 200),
            dim: Color::Rgb(108, 112, 134),
            error: Color::Rgb(243, 139, 168),
            section: Color::Rgb(137, 180, 250),

            selected_bg: Color::Rgb(69, 71, 90),
            selected_fg: Color::Rgb(249, 226, 175),

            highlight: Color::Rgb(249, 226, 175),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            hint: Color::Gray,

            tab_active_bg: Color::Blue,
            tab_active_fg: Color::White,
            tab_inactive: Color::DarkGray,

            heading: Color::Blue,
            label: Color::DarkGray,
            dim: Color::Gray,
            error: Color::Red,
            section: Color::Magenta,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            highlight: Color::Rgb(184, 134, 11), // Dark goldenrod
        }
    }
}
