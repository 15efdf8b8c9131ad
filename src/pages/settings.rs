use crate::config::ColorScheme;
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

/// Color scheme selector and auto-refresh toggle
pub struct SettingsPage {
    scheme: ColorScheme,
    auto_refresh: bool,
    refresh_secs: u64,
    content: Vec<Element>,
}

impl SettingsPage {
    pub fn new(scheme: ColorScheme, auto_refresh: bool, refresh_secs: u64) -> Self {
        let mut page = Self {
            scheme,
            auto_refresh,
            refresh_secs,
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn rebuild(&mut self) {
        let schemes = ColorScheme::ALL
            .iter()
            .map(|s| Element::item(s.label(), *s == self.scheme))
            .collect();

        let refresh = if self.auto_refresh {
            format!("On (every {}s)", self.refresh_secs)
        } else {
            "Off".to_string()
        };

        self.content = vec![
            Element::heading("Application Settings"),
            Element::Blank,
            Element::section("Color Scheme", schemes),
            Element::section("Refresh", vec![Element::field("Auto-refresh", refresh)]),
        ];
    }

    fn set_scheme(&mut self, scheme: ColorScheme) -> PageAction {
        self.scheme = scheme;
        self.rebuild();
        PageAction::SetScheme(scheme)
    }
}

impl Page for SettingsPage {
    fn title(&self) -> &str {
        "Settings"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.set_scheme(self.scheme.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_scheme(self.scheme.next()),
            KeyCode::Char('a') => {
                self.auto_refresh = !self.auto_refresh;
                self.rebuild();
                PageAction::SetAutoRefresh(self.auto_refresh)
            }
            _ => PageAction::Ignored,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        Some("←→: color scheme  a: auto-refresh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::{char_key, key};
    use crate::shell::to_plain_text;

    #[test]
    fn cycles_scheme() {
        let mut page = SettingsPage::new(ColorScheme::System, true, 2);
        assert!(to_plain_text(page.content()).contains("> Follow System"));

        assert_eq!(
            page.handle_key(key(KeyCode::Right)),
            PageAction::SetScheme(ColorScheme::Light)
        );
        assert!(to_plain_text(page.content()).contains("> Light"));

        page.handle_key(key(KeyCode::Left));
        assert_eq!(
            page.handle_key(key(KeyCode::Left)),
            PageAction::SetScheme(ColorScheme::Dark)
        );
    }

    #[test]
    fn toggles_auto_refresh() {
        let mut page = SettingsPage::new(ColorScheme::Dark, true, 5);
        assert!(to_plain_text(page.content()).contains("Auto-refresh: On (every 5s)"));

        assert_eq!(page.handle_key(char_key('a')), PageAction::SetAutoRefresh(false));
        assert!(to_plain_text(page.content()).contains("Auto-refresh: Off"));
        assert_eq!(page.handle_key(char_key('a')), PageAction::SetAutoRefresh(true));
    }
}
