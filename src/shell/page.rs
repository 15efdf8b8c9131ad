//! Page capability interface
//!
//! Every navigable unit of content implements [`Page`]. The shell only ever
//! talks to pages through this trait, so lifecycle hooks are dispatched
//! dynamically over `Box<dyn Page>` rather than through a class hierarchy.

use super::Element;
use crate::config::ColorScheme;
use crate::hyprland::DesktopSnapshot;
use crossterm::event::KeyEvent;
use std::borrow::Cow;
use std::fmt;

/// Opaque identifier naming a page in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(Cow<'static, str>);

impl PageId {
    /// Identifier backed by a static string (usable in `const` items)
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Outcome of a page handling a key press
///
/// Pages can't reach into app state; they describe what should happen and
/// the app applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Key not handled, let it bubble up
    Ignored,
    /// Key handled, nothing else to do
    Consumed,
    /// Key handled, show this message in the status line
    Status(String),
    /// Switch the application color scheme
    SetScheme(ColorScheme),
    /// Enable or disable periodic desktop refresh
    SetAutoRefresh(bool),
    /// Ask the shell to show another page
    Navigate(PageId),
    /// Open a modal message; the next key press closes it
    Dialog(Dialog),
}

/// Modal message box content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            is_error: true,
        }
    }
}

impl PageAction {
    pub fn was_handled(&self) -> bool {
        !matches!(self, PageAction::Ignored)
    }
}

/// A navigable unit of UI content with show/hide lifecycle hooks
pub trait Page {
    /// Label for the navigation bar and window title
    fn title(&self) -> &str;

    /// Current display tree
    fn content(&self) -> &[Element];

    /// Called right before the page becomes visible.
    ///
    /// Implementations that refresh data here must rebuild from scratch so
    /// repeated calls leave exactly one copy of the content.
    fn on_show(&mut self) {}

    /// Called right before the page is detached
    fn on_hide(&mut self) {}

    /// Handle a key while this page is visible
    fn handle_key(&mut self, _key: KeyEvent) -> PageAction {
        PageAction::Ignored
    }

    /// Accept desktop state gathered off the UI thread
    fn apply_snapshot(&mut self, _snapshot: &DesktopSnapshot) {}

    /// While true the page receives every key (text entry), bypassing the
    /// global bindings. Only Ctrl+C is kept.
    fn captures_input(&self) -> bool {
        false
    }

    /// Keybind hint shown in the status bar while visible
    fn hint(&self) -> Option<&'static str> {
        None
    }
}
