use super::selection::Selection;
use crate::hyprland::{DesktopSnapshot, Hyprctl, Window};
use crate::shell::{Element, Page, PageAction};
use crossterm::event::{KeyCode, KeyEvent};

/// Client window list with focus, close, fullscreen and move
pub struct WindowsPage {
    hyprctl: Hyprctl,
    windows: Vec<Window>,
    selection: Selection,
    /// Workspace used by `m`, set by the last digit pressed
    target_workspace: i64,
    content: Vec<Element>,
}

impl WindowsPage {
    pub fn new(hyprctl: Hyprctl) -> Self {
        let mut page = Self {
            hyprctl,
            windows: Vec::new(),
            selection: Selection::default(),
            target_workspace: 1,
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn reload(&mut self) {
        let windows = self.hyprctl.windows();
        self.set_windows(windows);
    }

    fn set_windows(&mut self, windows: Vec<Window>) {
        self.windows = windows;
        self.selection.clamp(self.windows.len());
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut content = vec![Element::heading("Windows"), Element::Blank];

        if self.windows.is_empty() {
            content.push(Element::dim("No open windows"));
        } else {
            let selected = self.selection.get(self.windows.len());
            let items = self
                .windows
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    Element::item(
                        format!("{} | {} | WS: {}", w.class, w.title, w.workspace.name),
                        selected == Some(i),
                    )
                })
                .collect();
            content.push(Element::section("Open Windows", items));
        }

        content.push(Element::Blank);
        content.push(Element::field(
            "Move target",
            format!("workspace {}", self.target_workspace),
        ));
        self.content = content;
    }

    fn selected_address(&self) -> Option<String> {
        let i = self.selection.get(self.windows.len())?;
        Some(self.windows[i].address.clone())
    }

    /// Run a dispatch against the selected window and describe the result
    fn with_selected(
        &mut self,
        verb: &str,
        dispatch: impl FnOnce(&Hyprctl, &str) -> bool,
        reload: bool,
    ) -> PageAction {
        let Some(address) = self.selected_address() else {
            return PageAction::Status("No window selected".to_string());
        };

        if dispatch(&self.hyprctl, &address) {
            if reload {
                self.reload();
            }
            PageAction::Status(format!("{} {}", verb, address))
        } else {
            PageAction::Status(format!("Failed: {} {}", verb.to_lowercase(), address))
        }
    }
}

impl Page for WindowsPage {
    fn title(&self) -> &str {
        "Windows"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn on_show(&mut self) {
        self.reload();
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.selection.handle(key.code, self.windows.len()) {
            self.rebuild();
            return PageAction::Consumed;
        }

        match key.code {
            KeyCode::Char('f') => self.with_selected("Focused", |h, a| h.focus_window(a), false),
            KeyCode::Char('c') => self.with_selected("Closed", |h, a| h.close_window(a), true),
            KeyCode::Char('F') => {
                self.with_selected("Toggled fullscreen for", |h, a| h.toggle_fullscreen(a), false)
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.target_workspace = i64::from(c as u8 - b'0');
                self.rebuild();
                PageAction::Status(format!("Move target: workspace {}", self.target_workspace))
            }
            KeyCode::Char('m') => {
                let target = self.target_workspace;
                self.with_selected(
                    &format!("Moved to workspace {}:", target),
                    |h, a| h.move_window_to_workspace(a, target),
                    true,
                )
            }
            _ => PageAction::Ignored,
        }
    }

    fn apply_snapshot(&mut self, snapshot: &DesktopSnapshot) {
        self.set_windows(snapshot.windows.clone());
    }

    fn hint(&self) -> Option<&'static str> {
        Some("↑↓: select  f: focus  c: close  F: fullscreen  1-9 then m: move")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;
    use crate::pages::fixtures::{self, char_key, key};
    use crate::shell::to_plain_text;

    fn page(runner: FakeRunner) -> WindowsPage {
        let mut page = WindowsPage::new(fixtures::hyprctl(runner, true));
        page.on_show();
        page
    }

    #[test]
    fn refresh_rebuilds_same_content_as_show() {
        let hyprctl = fixtures::hyprctl(fixtures::desktop_runner(), true);
        let shown = page(fixtures::desktop_runner());

        let mut refreshed = WindowsPage::new(hyprctl.clone());
        refreshed.apply_snapshot(&hyprctl.snapshot());
        assert_eq!(refreshed.content(), shown.content());

        refreshed.apply_snapshot(&hyprctl.snapshot());
        assert_eq!(refreshed.content(), shown.content());
    }

    #[test]
    fn refresh_keeps_selection_in_range() {
        let hyprctl = fixtures::hyprctl(fixtures::desktop_runner(), true);
        let mut page = page(fixtures::desktop_runner());
        page.handle_key(key(KeyCode::Down));

        let mut snapshot = hyprctl.snapshot();
        page.apply_snapshot(&snapshot);
        assert!(to_plain_text(page.content()).contains("> kitty | nvim | WS: code"));

        // The selected window went away
        snapshot.windows.truncate(1);
        page.apply_snapshot(&snapshot);
        assert!(to_plain_text(page.content()).contains("> firefox | Mozilla Firefox | WS: web"));
    }

    #[test]
    fn lists_windows() {
        let page = page(fixtures::desktop_runner());
        let text = to_plain_text(page.content());
        assert!(text.contains("> firefox | Mozilla Firefox | WS: web"));
        assert!(text.contains("  kitty | nvim | WS: code"));
        assert!(text.contains("Move target: workspace 1"));
    }

    #[test]
    fn actions_target_selected_address() {
        let runner = fixtures::desktop_runner().accept_all();
        let calls = runner.calls();
        let mut page = page(runner);

        page.handle_key(key(KeyCode::Down));
        assert_eq!(
            page.handle_key(char_key('f')),
            PageAction::Status("Focused 0x2b".to_string())
        );
        page.handle_key(char_key('F'));
        page.handle_key(char_key('4'));
        page.handle_key(char_key('m'));

        let calls = calls.lock().unwrap();
        assert!(calls.contains(&"hyprctl dispatch focuswindow address:0x2b".to_string()));
        assert!(calls.contains(&"hyprctl dispatch fullscreen address:0x2b".to_string()));
        assert!(calls.contains(&"hyprctl dispatch movetoworkspace 4,address:0x2b".to_string()));
    }

    #[test]
    fn close_reloads_list() {
        let runner = fixtures::desktop_runner().respond("hyprctl dispatch closewindow address:0x1a", "ok");
        let calls = runner.calls();
        let mut page = page(runner);

        page.handle_key(char_key('c'));
        let clients = calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == "hyprctl clients -j")
            .count();
        assert_eq!(clients, 2);
    }

    #[test]
    fn failed_dispatch_is_reported() {
        let mut page = page(fixtures::desktop_runner());
        assert_eq!(
            page.handle_key(char_key('c')),
            PageAction::Status("Failed: closed 0x1a".to_string())
        );
    }

    #[test]
    fn no_selection_is_a_status_message() {
        let mut page = page(FakeRunner::new());
        assert!(to_plain_text(page.content()).contains("No open windows"));
        assert_eq!(
            page.handle_key(char_key('f')),
            PageAction::Status("No window selected".to_string())
        );
    }
}
