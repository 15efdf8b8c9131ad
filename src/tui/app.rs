// Application state for the TUI
//
// App owns the navigation shell and everything around it: theme, status
// line, toast, help overlay, dialog, and the auto-refresh bookkeeping. Pages never
// touch this state directly; they return a PageAction that `apply` carries out.

use super::clipboard;
use super::components::toast::Toast;
use super::theme::Theme;
use crate::config::ColorScheme;
use crate::hyprland::{DesktopSnapshot, Hyprctl};
use crate::shell::{Dialog, NavigationShell, PageAction, PageId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Work order for one off-thread refresh
pub struct RefreshJob {
    pub page: PageId,
    pub generation: u64,
    pub hyprctl: Hyprctl,
}

/// Result of a refresh, delivered back to the UI loop
#[derive(Debug)]
pub struct Refreshed {
    /// Page that was visible when the refresh started
    pub page: PageId,
    /// Navigation generation the job was started in
    pub generation: u64,
    /// `None` if the refresh task itself failed
    pub snapshot: Option<DesktopSnapshot>,
}

/// Main application state
pub struct App {
    pub shell: NavigationShell,
    pub theme: Theme,
    pub scheme: ColorScheme,
    hyprctl: Hyprctl,

    /// Last status message (bottom bar)
    pub status: Option<String>,
    pub toast: Option<Toast>,
    pub show_help: bool,
    /// Modal message; swallows the next key
    pub dialog: Option<Dialog>,

    /// Vertical scroll offset of the content area
    pub scroll: u16,

    auto_refresh: bool,
    refresh_interval: Duration,
    refresh_in_flight: bool,
    /// Bumped on every navigation; older refresh results are stale
    generation: u64,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        shell: NavigationShell,
        hyprctl: Hyprctl,
        scheme: ColorScheme,
        auto_refresh: bool,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            shell,
            theme: Theme::for_scheme(scheme),
            scheme,
            hyprctl,
            status: None,
            toast: None,
            show_help: false,
            dialog: None,
            scroll: 0,
            auto_refresh,
            refresh_interval,
            refresh_in_flight: false,
            generation: 0,
            should_quit: false,
        }
    }

    /// Show the start page, falling back to the first registered page
    pub fn start(&mut self, page: &PageId) {
        self.generation += 1;
        if self.shell.navigate_to(page) {
            return;
        }
        let known: Vec<&str> = self.shell.page_ids().map(PageId::as_str).collect();
        tracing::warn!(
            "Unknown start page '{}' (known: {}), showing the first page",
            page,
            known.join(", ")
        );
        self.shell.navigate_index(0);
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Layered dispatch: help overlay → dialog → global keys → current page
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key closes the overlay
            self.show_help = false;
            return;
        }

        if self.dialog.take().is_some() {
            return;
        }

        let capturing = self
            .shell
            .current_page()
            .is_some_and(|page| page.captures_input());
        if capturing {
            if is_ctrl_c(&key) {
                self.should_quit = true;
                return;
            }
        } else if self.handle_global_key(&key) {
            return;
        }

        if let Some(page) = self.shell.current_page_mut() {
            let action = page.handle_key(key);
            if !action.was_handled() {
                tracing::trace!("Unhandled key {:?}", key.code);
            }
            self.apply(action);
        }
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            _ if is_ctrl_c(key) => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab => self.navigated(|shell| shell.next()),
            KeyCode::BackTab => self.navigated(|shell| shell.prev()),
            KeyCode::F(n @ 1..=12) => self.navigated(|shell| shell.navigate_index(n as usize - 1)),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('y') => self.copy_page(),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Esc => self.status = None,
            _ => return false,
        }
        true
    }

    /// Run a shell navigation and reset per-page view state if it moved
    fn navigated(&mut self, nav: impl FnOnce(&mut NavigationShell) -> bool) {
        if nav(&mut self.shell) {
            self.generation += 1;
            self.scroll = 0;
            self.status = None;
        }
    }

    fn copy_page(&mut self) {
        let text = clipboard::page_text(&self.shell.title(), self.shell.visible_content());
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.show_toast("✓ Copied to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    /// Carry out what a page asked for
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Ignored | PageAction::Consumed => {}
            PageAction::Status(message) => {
                tracing::info!("{}", message);
                self.status = Some(message);
            }
            PageAction::SetScheme(scheme) => {
                self.scheme = scheme;
                self.theme = Theme::for_scheme(scheme);
                self.status = Some(format!("Color scheme: {}", scheme.label()));
            }
            PageAction::SetAutoRefresh(enabled) => {
                self.auto_refresh = enabled;
                self.status = Some(
                    if enabled {
                        "Auto-refresh enabled"
                    } else {
                        "Auto-refresh disabled"
                    }
                    .to_string(),
                );
            }
            PageAction::Navigate(page) => self.navigated(|shell| shell.navigate_to(&page)),
            PageAction::Dialog(dialog) => {
                if dialog.is_error {
                    tracing::warn!("{}", dialog.message.replace('\n', " "));
                }
                self.dialog = Some(dialog);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auto-refresh
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a refresh if enabled and none is running
    pub fn begin_refresh(&mut self) -> Option<RefreshJob> {
        if !self.auto_refresh || self.refresh_in_flight {
            return None;
        }
        let page = self.shell.current()?.clone();
        self.refresh_in_flight = true;
        Some(RefreshJob {
            page,
            generation: self.generation,
            hyprctl: self.hyprctl.clone(),
        })
    }

    /// Apply a finished refresh to the page it was taken for, if still visible
    pub fn finish_refresh(&mut self, done: Refreshed) {
        self.refresh_in_flight = false;

        let Some(snapshot) = done.snapshot else {
            return;
        };
        // Leaving and re-entering the page re-queried it in on_show
        if !self.auto_refresh
            || done.generation != self.generation
            || self.shell.current() != Some(&done.page)
        {
            tracing::trace!("Dropping stale refresh for {}", done.page);
            return;
        }
        if let Some(page) = self.shell.current_page_mut() {
            page.apply_snapshot(&snapshot);
        }
    }

    /// Key hint for the visible page
    pub fn page_hint(&self) -> Option<&'static str> {
        self.shell.current_page().and_then(|p| p.hint())
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;
    use crate::pages::fixtures::{self, char_key, key};
    use crate::pages::{self, build_shell};
    use crate::shell::to_plain_text;

    fn app(runner: FakeRunner) -> App {
        let deps = fixtures::deps(runner, true);
        let hyprctl = deps.hyprctl.clone();
        let mut app = App::new(
            build_shell(deps),
            hyprctl,
            ColorScheme::System,
            true,
            Duration::from_secs(2),
        );
        app.start(&pages::HOME);
        app
    }

    #[test]
    fn unknown_start_page_falls_back_to_first() {
        let deps = fixtures::deps(FakeRunner::new(), false);
        let hyprctl = deps.hyprctl.clone();
        let mut app = App::new(
            build_shell(deps),
            hyprctl,
            ColorScheme::System,
            false,
            Duration::from_secs(2),
        );
        app.start(&PageId::new("nowhere"));
        assert_eq!(app.shell.current(), Some(&pages::HOME));
    }

    #[test]
    fn tab_and_function_keys_navigate() {
        let mut app = app(fixtures::desktop_runner());

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.shell.current(), Some(&pages::WORKSPACES));

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.shell.current(), Some(&pages::ABOUT));

        app.handle_key(key(KeyCode::F(7)));
        assert_eq!(app.shell.current(), Some(&pages::SETTINGS));

        // Out of range is a no-op
        app.handle_key(key(KeyCode::F(12)));
        assert_eq!(app.shell.current(), Some(&pages::SETTINGS));
    }

    #[test]
    fn settings_actions_update_theme_and_refresh() {
        let mut app = app(fixtures::desktop_runner());
        app.handle_key(key(KeyCode::F(7)));

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.scheme, ColorScheme::Light);
        assert_eq!(app.theme, Theme::light());
        assert_eq!(app.status.as_deref(), Some("Color scheme: Light"));

        app.handle_key(char_key('a'));
        assert!(!app.auto_refresh());
        assert!(app.begin_refresh().is_none());
    }

    #[test]
    fn page_navigate_action_switches_page() {
        let mut app = app(fixtures::desktop_runner());
        app.handle_key(char_key('m'));
        assert_eq!(app.shell.current(), Some(&pages::MONITORS));
    }

    #[test]
    fn quit_keys() {
        let mut app = app(FakeRunner::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app(FakeRunner::new());
        app.handle_key(char_key('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut app = app(FakeRunner::new());
        app.handle_key(char_key('?'));
        assert!(app.show_help);

        app.handle_key(char_key('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn dialog_swallows_next_key() {
        let mut app = app(FakeRunner::new());
        app.apply(PageAction::Dialog(Dialog::error("Could not open file")));
        assert!(app.dialog.is_some());

        app.handle_key(char_key('q'));
        assert!(app.dialog.is_none());
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.shell.current(), Some(&pages::WORKSPACES));
    }

    #[test]
    fn capturing_page_receives_global_keys() {
        let mut app = app(FakeRunner::new());
        app.handle_key(key(KeyCode::F(6)));
        assert_eq!(app.shell.current(), Some(&pages::NOTES));

        app.handle_key(char_key('e'));
        for c in "q?y".chars() {
            app.handle_key(char_key(c));
        }
        app.handle_key(key(KeyCode::Tab));
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert_eq!(app.shell.current(), Some(&pages::NOTES));

        app.handle_key(key(KeyCode::Esc));
        assert!(to_plain_text(app.shell.visible_content()).contains("q?y"));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.shell.current(), Some(&pages::SETTINGS));

        // Ctrl+C still quits mid-edit
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(char_key('e'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn unreadable_note_opens_error_dialog_and_app_stays_usable() {
        let dir = std::env::temp_dir().join(format!("hyprspa-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("blob.bin");
        std::fs::write(&path, [0xc3, 0x28, 0xa0, 0xa1]).unwrap();

        let mut app = app(FakeRunner::new());
        app.handle_key(key(KeyCode::F(6)));
        app.handle_key(char_key('o'));
        for c in path.display().to_string().chars() {
            app.handle_key(char_key(c));
        }
        app.handle_key(key(KeyCode::Enter));

        let dialog = app.dialog.clone().expect("error dialog");
        assert!(dialog.is_error);
        assert!(dialog.message.contains("not a UTF-8 text file"));

        app.handle_key(key(KeyCode::Enter));
        assert!(app.dialog.is_none());
        app.handle_key(char_key('w'));
        assert_eq!(
            app.dialog.as_ref().map(|d| d.title.as_str()),
            Some("Word Count")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn one_refresh_in_flight_at_a_time() {
        let mut app = app(fixtures::desktop_runner());

        let job = app.begin_refresh().expect("refresh should start");
        assert_eq!(job.page, pages::HOME);
        assert!(app.begin_refresh().is_none());

        app.finish_refresh(Refreshed {
            page: job.page,
            generation: job.generation,
            snapshot: Some(job.hyprctl.snapshot()),
        });
        assert!(app.begin_refresh().is_some());
    }

    #[test]
    fn refresh_applies_only_to_the_page_it_was_taken_for() {
        let mut app = app(fixtures::desktop_runner());
        let job = app.begin_refresh().unwrap();

        // User moved on before the result arrived
        app.handle_key(key(KeyCode::Tab));
        let before = app.shell.visible_content().to_vec();
        app.finish_refresh(Refreshed {
            page: job.page,
            generation: job.generation,
            snapshot: Some(DesktopSnapshot::default()),
        });
        assert_eq!(app.shell.visible_content(), before.as_slice());

        // Result for the visible page replaces its content
        let job = app.begin_refresh().unwrap();
        app.finish_refresh(Refreshed {
            page: job.page,
            generation: job.generation,
            snapshot: Some(DesktopSnapshot::default()),
        });
        assert!(to_plain_text(app.shell.visible_content())
            .contains("No workspace information available"));
    }

    #[test]
    fn refresh_started_before_reentering_page_is_dropped() {
        let mut app = app(fixtures::desktop_runner());
        let job = app.begin_refresh().unwrap();

        // Away and back: on_show already queried fresh data
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.shell.current(), Some(&job.page));
        let fresh = app.shell.visible_content().to_vec();

        app.finish_refresh(Refreshed {
            page: job.page,
            generation: job.generation,
            snapshot: Some(DesktopSnapshot::default()),
        });
        assert_eq!(app.shell.visible_content(), fresh.as_slice());
        assert!(app.begin_refresh().is_some());
    }

    #[test]
    fn failed_refresh_task_clears_in_flight() {
        let mut app = app(FakeRunner::new());
        let job = app.begin_refresh().unwrap();
        app.finish_refresh(Refreshed {
            page: job.page,
            generation: job.generation,
            snapshot: None,
        });
        assert!(app.begin_refresh().is_some());
    }
}
