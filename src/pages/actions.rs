use crate::desktop::DesktopActions;
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

const NOTIFICATION_TITLE: &str = "Hyprland SPA";
const NOTIFICATION_BODY: &str = "Hello from your Hyprland terminal app!";

/// Desktop utility shortcuts
pub struct ActionsPage {
    desktop: DesktopActions,
    last_result: Option<String>,
    content: Vec<Element>,
}

impl ActionsPage {
    pub fn new(desktop: DesktopActions) -> Self {
        let mut page = Self {
            desktop,
            last_result: None,
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn rebuild(&mut self) {
        let mut content = vec![
            Element::heading("Quick Actions"),
            Element::Blank,
            Element::field("n", "Send a test notification"),
            Element::field(
                "s",
                format!(
                    "Take a screenshot (saved to {})",
                    self.desktop.screenshot_dir().display()
                ),
            ),
        ];

        if let Some(result) = &self.last_result {
            content.push(Element::Blank);
            content.push(Element::field("Last result", result));
        }

        self.content = content;
    }

    fn finish(&mut self, message: String) -> PageAction {
        self.last_result = Some(message.clone());
        self.rebuild();
        PageAction::Status(message)
    }
}

impl Page for ActionsPage {
    fn title(&self) -> &str {
        "Actions"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char('n') => {
                let message = self
                    .desktop
                    .send_notification(NOTIFICATION_TITLE, NOTIFICATION_BODY);
                self.finish(message)
            }
            KeyCode::Char('s') => {
                let message = self.desktop.take_screenshot();
                self.finish(message)
            }
            _ => PageAction::Ignored,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        Some("n: notify  s: screenshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;
    use crate::pages::fixtures::char_key;
    use crate::shell::to_plain_text;
    use std::sync::Arc;

    #[test]
    fn results_surface_as_status_and_content() {
        let desktop = DesktopActions::with_runner(Arc::new(FakeRunner::new().accept_all()), "/tmp");
        let mut page = ActionsPage::new(desktop);

        assert_eq!(
            page.handle_key(char_key('n')),
            PageAction::Status("Notification sent!".to_string())
        );
        assert!(to_plain_text(page.content()).contains("Last result: Notification sent!"));

        assert_eq!(
            page.handle_key(char_key('s')),
            PageAction::Status("Screenshot saved to /tmp".to_string())
        );
    }

    #[test]
    fn missing_tools_are_reported() {
        let desktop = DesktopActions::with_runner(Arc::new(FakeRunner::new()), "/tmp");
        let mut page = ActionsPage::new(desktop);

        assert_eq!(
            page.handle_key(char_key('n')),
            PageAction::Status("notify-send not found. Install libnotify.".to_string())
        );
        assert_eq!(page.handle_key(char_key('x')), PageAction::Ignored);
    }
}
