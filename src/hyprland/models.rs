//! Data models for hyprctl JSON output
//!
//! Only the fields the pages display are mapped. Serde ignores the rest, and
//! missing fields fall back to the same placeholders the UI would show anyway
//! ("Unknown", "Untitled", 0).

use serde::{Deserialize, Serialize};

fn unknown() -> String {
    "Unknown".to_string()
}

fn untitled() -> String {
    "Untitled".to_string()
}

fn unit_scale() -> f64 {
    1.0
}

/// Lightweight workspace reference embedded in monitors and windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unknown")]
    pub name: String,
}

impl Default for WorkspaceRef {
    fn default() -> Self {
        Self {
            id: 0,
            name: unknown(),
        }
    }
}

/// `hyprctl activeworkspace -j` / `hyprctl workspaces -j` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub monitor: String,
    #[serde(default)]
    pub windows: u32,
}

/// `hyprctl monitors -j` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub refresh_rate: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub active_workspace: WorkspaceRef,
}

/// `hyprctl clients -j` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub address: String,
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default = "unknown")]
    pub class: String,
    #[serde(default)]
    pub workspace: WorkspaceRef,
}

/// Active workspace plus monitor list, as shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyprStatus {
    pub workspace: Workspace,
    pub monitors: Vec<Monitor>,
}

impl HyprStatus {
    pub fn focused_monitor(&self) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.focused)
    }
}

/// Everything the desktop pages show, gathered in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesktopSnapshot {
    /// `None` when hyprctl is unavailable
    pub status: Option<HyprStatus>,
    /// Filled even when the active workspace query fails
    pub monitors: Vec<Monitor>,
    pub workspaces: Vec<Workspace>,
    pub windows: Vec<Window>,
}
