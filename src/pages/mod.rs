//! Concrete pages and the registry that wires them into a shell
//!
//! Registration order is navigation order (Tab cycles it, F1-F9 jump to it).

mod about;
mod actions;
mod home;
mod logs;
mod monitors;
mod notes;
mod selection;
mod settings;
mod windows;
mod workspaces;

#[cfg(test)]
pub(crate) mod fixtures;

pub use about::{AboutPage, SystemInfo};
pub use actions::ActionsPage;
pub use home::{status_rows, HomePage};
pub use logs::LogsPage;
pub use monitors::MonitorsPage;
pub use notes::NotesPage;
pub use settings::SettingsPage;
pub use windows::WindowsPage;
pub use workspaces::WorkspacesPage;

use crate::config::ColorScheme;
use crate::desktop::DesktopActions;
use crate::hyprland::Hyprctl;
use crate::logging::LogBuffer;
use crate::shell::{NavigationShell, PageId};

pub const HOME: PageId = PageId::from_static("home");
pub const WORKSPACES: PageId = PageId::from_static("workspaces");
pub const WINDOWS: PageId = PageId::from_static("windows");
pub const MONITORS: PageId = PageId::from_static("monitors");
pub const ACTIONS: PageId = PageId::from_static("actions");
pub const NOTES: PageId = PageId::from_static("notes");
pub const SETTINGS: PageId = PageId::from_static("settings");
pub const LOGS: PageId = PageId::from_static("logs");
pub const ABOUT: PageId = PageId::from_static("about");

/// Everything the pages need from the outside world
#[derive(Clone)]
pub struct PageDeps {
    pub app_title: String,
    pub hyprctl: Hyprctl,
    pub desktop: DesktopActions,
    pub logs: LogBuffer,
    pub system: SystemInfo,
    pub color_scheme: ColorScheme,
    pub auto_refresh: bool,
    pub refresh_secs: u64,
}

/// Register every page, in navigation order
pub fn build_shell(deps: PageDeps) -> NavigationShell {
    let PageDeps {
        app_title,
        hyprctl,
        desktop,
        logs,
        system,
        color_scheme,
        auto_refresh,
        refresh_secs,
    } = deps;

    NavigationShell::new(app_title.clone())
        .with_page(HOME, HomePage::new(&app_title, hyprctl.clone()))
        .with_page(WORKSPACES, WorkspacesPage::new(hyprctl.clone()))
        .with_page(WINDOWS, WindowsPage::new(hyprctl.clone()))
        .with_page(MONITORS, MonitorsPage::new(hyprctl))
        .with_page(ACTIONS, ActionsPage::new(desktop))
        .with_page(NOTES, NotesPage::new())
        .with_page(
            SETTINGS,
            SettingsPage::new(color_scheme, auto_refresh, refresh_secs),
        )
        .with_page(LOGS, LogsPage::new(logs))
        .with_page(ABOUT, AboutPage::new(system))
}
