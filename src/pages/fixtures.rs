//! Canned hyprctl output and page dependencies for tests

use super::{PageDeps, SystemInfo};
use crate::config::ColorScheme;
use crate::desktop::DesktopActions;
use crate::hyprland::fake::FakeRunner;
use crate::hyprland::{Hyprctl, DEFAULT_BINARY};
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

pub const ACTIVE: &str = r#"{"id": 2, "name": "code", "monitor": "DP-1", "windows": 3}"#;

pub const MONITORS: &str = r#"[
    {"id": 0, "name": "DP-1", "width": 2560, "height": 1440, "refreshRate": 143.912,
     "scale": 1.25, "focused": true, "activeWorkspace": {"id": 2, "name": "code"}},
    {"id": 1, "name": "HDMI-A-1", "width": 1920, "height": 1080, "refreshRate": 60.0,
     "scale": 1.0, "focused": false, "activeWorkspace": {"id": 5, "name": "5"}}
]"#;

pub const WORKSPACES: &str = r#"[
    {"id": 1, "name": "web", "monitor": "DP-1", "windows": 2},
    {"id": 2, "name": "code", "monitor": "DP-1", "windows": 3},
    {"id": 5, "name": "5", "monitor": "HDMI-A-1", "windows": 0}
]"#;

pub const CLIENTS: &str = r#"[
    {"address": "0x1a", "title": "Mozilla Firefox", "class": "firefox",
     "workspace": {"id": 1, "name": "web"}, "pid": 4242},
    {"address": "0x2b", "title": "nvim", "class": "kitty",
     "workspace": {"id": 2, "name": "code"}}
]"#;

/// Runner that answers every read-only query with the fixtures above
pub fn desktop_runner() -> FakeRunner {
    FakeRunner::new()
        .respond("hyprctl activeworkspace -j", ACTIVE)
        .respond("hyprctl monitors -j", MONITORS)
        .respond("hyprctl workspaces -j", WORKSPACES)
        .respond("hyprctl clients -j", CLIENTS)
}

pub fn hyprctl(runner: FakeRunner, session: bool) -> Hyprctl {
    Hyprctl::with_runner(DEFAULT_BINARY, Arc::new(runner), session)
}

pub fn deps(runner: FakeRunner, session: bool) -> PageDeps {
    PageDeps {
        app_title: "Hyprland SPA".to_string(),
        hyprctl: hyprctl(runner, session),
        desktop: DesktopActions::with_runner(Arc::new(FakeRunner::new()), "/tmp"),
        logs: LogBuffer::new(),
        system: SystemInfo {
            display_server: "wayland".to_string(),
            desktop: "Hyprland".to_string(),
            hyprland: session,
        },
        color_scheme: ColorScheme::System,
        auto_refresh: true,
        refresh_secs: 2,
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}
