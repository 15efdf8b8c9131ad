use crate::hyprland::{DesktopSnapshot, Hyprctl, Monitor};
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

/// Read-only monitor details
pub struct MonitorsPage {
    hyprctl: Hyprctl,
    content: Vec<Element>,
}

impl MonitorsPage {
    pub fn new(hyprctl: Hyprctl) -> Self {
        let mut page = Self {
            hyprctl,
            content: Vec::new(),
        };
        page.rebuild(&[]);
        page
    }

    fn rebuild(&mut self, monitors: &[Monitor]) {
        let mut content = vec![Element::heading("Monitors"), Element::Blank];

        if monitors.is_empty() {
            content.push(Element::dim("No monitor information available"));
        }

        for monitor in monitors {
            content.push(Element::section(
                format!("Monitor: {}", monitor.name),
                vec![
                    Element::field(
                        "Resolution",
                        format!(
                            "{}x{}@{:.2}Hz",
                            monitor.width, monitor.height, monitor.refresh_rate
                        ),
                    ),
                    Element::field("Scale", format!("{}x", monitor.scale)),
                    Element::field("Focused", if monitor.focused { "Yes" } else { "No" }),
                    Element::field("Workspace", &monitor.active_workspace.name),
                ],
            ));
        }

        self.content = content;
    }
}

impl Page for MonitorsPage {
    fn title(&self) -> &str {
        "Monitors"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn on_show(&mut self) {
        let monitors = self.hyprctl.monitors();
        self.rebuild(&monitors);
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char('r') => {
                self.on_show();
                PageAction::Status("Monitor info refreshed".to_string())
            }
            _ => PageAction::Ignored,
        }
    }

    fn apply_snapshot(&mut self, snapshot: &DesktopSnapshot) {
        self.rebuild(&snapshot.monitors);
    }

    fn hint(&self) -> Option<&'static str> {
        Some("r: refresh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;
    use crate::pages::fixtures;
    use crate::shell::to_plain_text;

    #[test]
    fn shows_each_monitor() {
        let mut page = MonitorsPage::new(fixtures::hyprctl(fixtures::desktop_runner(), true));
        page.on_show();

        let text = to_plain_text(page.content());
        assert!(text.contains("[Monitor: DP-1]"));
        assert!(text.contains("Resolution: 2560x1440@143.91Hz"));
        assert!(text.contains("Scale: 1.25x"));
        assert!(text.contains("Focused: Yes"));
        assert!(text.contains("Resolution: 1920x1080@60.00Hz"));
        assert!(text.contains("Scale: 1x"));
        assert!(text.contains("Focused: No"));
    }

    #[test]
    fn refresh_rebuilds_same_content_as_show() {
        let hyprctl = fixtures::hyprctl(fixtures::desktop_runner(), true);
        let mut shown = MonitorsPage::new(hyprctl.clone());
        shown.on_show();

        let mut refreshed = MonitorsPage::new(hyprctl.clone());
        refreshed.apply_snapshot(&hyprctl.snapshot());
        assert_eq!(refreshed.content(), shown.content());

        // Repeated refreshes never duplicate sections
        refreshed.apply_snapshot(&hyprctl.snapshot());
        assert_eq!(refreshed.content(), shown.content());
    }

    #[test]
    fn refresh_keeps_monitors_when_active_workspace_fails() {
        let runner = FakeRunner::new()
            .fail("hyprctl activeworkspace -j", "boom")
            .respond("hyprctl monitors -j", fixtures::MONITORS);
        let hyprctl = fixtures::hyprctl(runner, true);
        let mut page = MonitorsPage::new(hyprctl.clone());

        page.on_show();
        let shown = page.content().to_vec();
        assert!(to_plain_text(&shown).contains("[Monitor: HDMI-A-1]"));

        page.apply_snapshot(&hyprctl.snapshot());
        assert_eq!(page.content(), shown.as_slice());
    }

    #[test]
    fn unavailable_shows_placeholder() {
        let mut page = MonitorsPage::new(fixtures::hyprctl(FakeRunner::new(), true));
        page.on_show();
        assert!(to_plain_text(page.content()).contains("No monitor information available"));
    }
}
