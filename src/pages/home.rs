use super::{MONITORS, WORKSPACES};
use crate::hyprland::{DesktopSnapshot, HyprStatus, Hyprctl};
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

/// Landing page with a live Hyprland status section
pub struct HomePage {
    heading: String,
    hyprctl: Hyprctl,
    content: Vec<Element>,
}

impl HomePage {
    pub fn new(app_title: &str, hyprctl: Hyprctl) -> Self {
        let mut page = Self {
            heading: format!("Welcome to {}", app_title),
            hyprctl,
            content: Vec::new(),
        };
        page.rebuild(None);
        page
    }

    fn refresh(&mut self) {
        let status = self.hyprctl.status();
        self.rebuild(status.as_ref());
    }

    /// Replace the whole tree; the status section is never appended twice
    fn rebuild(&mut self, status: Option<&HyprStatus>) {
        let mut content = vec![Element::heading(&self.heading), Element::Blank];

        if !self.hyprctl.is_hyprland() {
            content.push(Element::dim("Not running under Hyprland"));
            self.content = content;
            return;
        }

        let children = match status {
            Some(status) => status_rows(status),
            None => vec![Element::error("Failed to get Hyprland information")],
        };

        content.push(Element::section("Hyprland Status", children));
        self.content = content;
    }
}

/// Summary rows shared by the Home page and `hyprspa status`
pub fn status_rows(status: &HyprStatus) -> Vec<Element> {
    let mut rows = vec![
        Element::field("Active Workspace", &status.workspace.name),
        Element::field("Monitors", format!("{} connected", status.monitors.len())),
    ];
    if let Some(monitor) = status.focused_monitor() {
        rows.push(Element::field("Focused Monitor", &monitor.name));
    }
    rows
}

impl Page for HomePage {
    fn title(&self) -> &str {
        "Home"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn on_show(&mut self) {
        self.refresh();
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char('r') => {
                self.refresh();
                PageAction::Status("Hyprland info refreshed".to_string())
            }
            KeyCode::Char('w') => PageAction::Navigate(WORKSPACES),
            KeyCode::Char('m') => PageAction::Navigate(MONITORS),
            _ => PageAction::Ignored,
        }
    }

    fn apply_snapshot(&mut self, snapshot: &DesktopSnapshot) {
        self.rebuild(snapshot.status.as_ref());
    }

    fn hint(&self) -> Option<&'static str> {
        Some("r: refresh  w: workspaces  m: monitors")
    }
}
