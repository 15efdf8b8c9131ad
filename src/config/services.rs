//! Service sections: HTTP endpoint, auto-refresh, hyprctl, desktop actions

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default endpoint address, loopback only
pub const DEFAULT_API_BIND: &str = "127.0.0.1:6000";

fn default_api_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 6000))
}

// ─────────────────────────────────────────────────────────────────────────────
// [api]
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP endpoint settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Serve `GET /api/hello` alongside the TUI
    pub enabled: bool,
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_addr: default_api_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileApi {
    pub enabled: Option<bool>,
    pub bind_addr: Option<String>,
}

impl ApiConfig {
    /// Create from file config; `env_bind` (HYPRSPA_BIND) wins over the file
    pub fn from_file(file: Option<FileApi>, env_bind: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let bind_addr = match env_bind.or(file.bind_addr) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                eprintln!(
                    "Warning: invalid bind address {:?} ({}), using {}",
                    raw, e, DEFAULT_API_BIND
                );
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            bind_addr,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [refresh]
// ─────────────────────────────────────────────────────────────────────────────

/// Longest accepted refresh period; timers overflow far beyond it
pub const MAX_REFRESH_SECS: u64 = 3600;

/// Periodic desktop refresh (cooperative polling)
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 2,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileRefresh {
    pub enabled: Option<bool>,
    pub interval_secs: Option<u64>,
}

impl RefreshConfig {
    pub fn from_file(file: Option<FileRefresh>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            interval_secs: match file.interval_secs {
                None => defaults.interval_secs,
                // Zero would spin the refresh timer
                Some(0) => {
                    eprintln!(
                        "Warning: refresh.interval_secs must be positive, using {}",
                        defaults.interval_secs
                    );
                    defaults.interval_secs
                }
                Some(secs) if secs > MAX_REFRESH_SECS => {
                    eprintln!(
                        "Warning: refresh.interval_secs {} is too large, using {}",
                        secs, MAX_REFRESH_SECS
                    );
                    MAX_REFRESH_SECS
                }
                Some(secs) => secs,
            },
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [hyprland]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct HyprlandConfig {
    /// Control binary name or path
    pub binary: String,
}

impl Default for HyprlandConfig {
    fn default() -> Self {
        Self {
            binary: crate::hyprland::DEFAULT_BINARY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHyprland {
    pub binary: Option<String>,
}

impl HyprlandConfig {
    pub fn from_file(file: Option<FileHyprland>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            binary: file.binary.unwrap_or_else(|| Self::default().binary),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// [actions]
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ActionsConfig {
    /// Where screenshots are written
    pub screenshot_dir: PathBuf,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            screenshot_dir: PathBuf::from("/tmp"),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileActions {
    pub screenshot_dir: Option<String>,
}

impl ActionsConfig {
    pub fn from_file(file: Option<FileActions>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            screenshot_dir: file
                .screenshot_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| Self::default().screenshot_dir),
        }
    }
}
