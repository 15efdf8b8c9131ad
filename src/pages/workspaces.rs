use super::selection::Selection;
use crate::hyprland::{DesktopSnapshot, Hyprctl, Workspace};
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

/// Workspace list with switching
pub struct WorkspacesPage {
    hyprctl: Hyprctl,
    workspaces: Vec<Workspace>,
    selection: Selection,
    content: Vec<Element>,
}

impl WorkspacesPage {
    pub fn new(hyprctl: Hyprctl) -> Self {
        let mut page = Self {
            hyprctl,
            workspaces: Vec::new(),
            selection: Selection::default(),
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn set_workspaces(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
        self.selection.clamp(self.workspaces.len());
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut content = vec![Element::heading("Workspaces"), Element::Blank];

        if self.workspaces.is_empty() {
            content.push(Element::dim("No workspace information available"));
        } else {
            let selected = self.selection.get(self.workspaces.len());
            let items = self
                .workspaces
                .iter()
                .enumerate()
                .map(|(i, ws)| {
                    Element::item(
                        format!("ID: {} | {} | Windows: {}", ws.id, ws.name, ws.windows),
                        selected == Some(i),
                    )
                })
                .collect();
            content.push(Element::section("Active Workspaces", items));
        }

        self.content = content;
    }

    fn switch(&self, id: i64) -> PageAction {
        if self.hyprctl.switch_workspace(id) {
            PageAction::Status(format!("Switched to workspace {}", id))
        } else {
            PageAction::Status(format!("Failed to switch to workspace {}", id))
        }
    }
}

impl Page for WorkspacesPage {
    fn title(&self) -> &str {
        "Workspaces"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn on_show(&mut self) {
        let workspaces = self.hyprctl.workspaces();
        self.set_workspaces(workspaces);
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.selection.handle(key.code, self.workspaces.len()) {
            self.rebuild();
            return PageAction::Consumed;
        }

        match key.code {
            KeyCode::Enter => match self.selection.get(self.workspaces.len()) {
                Some(i) => self.switch(self.workspaces[i].id),
                None => PageAction::Status("No workspace selected".to_string()),
            },
            // Quick switch to workspaces 1-5
            KeyCode::Char(c @ '1'..='5') => self.switch(i64::from(c as u8 - b'0')),
            _ => PageAction::Ignored,
        }
    }

    fn apply_snapshot(&mut self, snapshot: &DesktopSnapshot) {
        self.set_workspaces(snapshot.workspaces.clone());
    }

    fn hint(&self) -> Option<&'static str> {
        Some("↑↓: select  Enter: switch  1-5: quick switch")
    }
}
