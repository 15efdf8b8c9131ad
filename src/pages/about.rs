use crate::hyprland::running_under_hyprland;
use crate::shell::{Element, Page};

const FEATURES: &[&str] = &[
    "Terminal UI with single-page navigation",
    "Hyprland workspace, window and monitor management",
    "Desktop notifications and screenshots",
    "Plain-text notes with word count",
    "Light, dark and system color schemes",
    "Local HTTP endpoint (GET /api/hello)",
];

/// Host session details shown on the About page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub display_server: String,
    pub desktop: String,
    pub hyprland: bool,
}

impl SystemInfo {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_else(|_| "Unknown".to_string());
        Self {
            display_server: var("XDG_SESSION_TYPE"),
            desktop: var("XDG_CURRENT_DESKTOP"),
            hyprland: running_under_hyprland(),
        }
    }
}

/// Static description plus system information
pub struct AboutPage {
    content: Vec<Element>,
}

impl AboutPage {
    pub fn new(system: SystemInfo) -> Self {
        let mut features = String::from("Features:");
        for feature in FEATURES {
            features.push_str("\n• ");
            features.push_str(feature);
        }

        let content = vec![
            Element::heading("About This App"),
            Element::Blank,
            Element::text(
                "A single-page terminal application with native Hyprland support.",
            ),
            Element::Blank,
            Element::text(features),
            Element::Blank,
            Element::text(format!("Version {}", crate::config::VERSION)),
            Element::Blank,
            Element::section(
                "System Information",
                vec![
                    Element::field("Display Server", &system.display_server),
                    Element::field("Desktop", &system.desktop),
                    Element::field(
                        "Running under Hyprland",
                        if system.hyprland { "Yes" } else { "No" },
                    ),
                ],
            ),
        ];

        Self { content }
    }
}

impl Page for AboutPage {
    fn title(&self) -> &str {
        "About"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }
}
