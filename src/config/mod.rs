//! Configuration for the navigation shell and its endpoint
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/hyprspa/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod appearance;
mod observability;
mod serialization;
mod services;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use appearance::ColorScheme;
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use services::{
    ActionsConfig, ApiConfig, FileActions, FileApi, FileHyprland, FileRefresh, HyprlandConfig,
    RefreshConfig,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_TITLE: &str = "Hyprland SPA";

pub const DEFAULT_START_PAGE: &str = "home";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application title shown in the title bar ("{title} - {page}")
    pub title: String,

    /// Page shown at startup; unknown ids fall back to the first page
    pub start_page: String,

    pub color_scheme: ColorScheme,

    /// Whether to run the TUI (disabled for headless mode)
    pub enable_tui: bool,

    /// HTTP endpoint settings
    pub api: ApiConfig,

    /// Periodic status refresh
    pub refresh: RefreshConfig,

    pub hyprland: HyprlandConfig,

    pub actions: ActionsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            start_page: DEFAULT_START_PAGE.to_string(),
            color_scheme: ColorScheme::default(),
            enable_tui: true,
            api: ApiConfig::default(),
            refresh: RefreshConfig::default(),
            hyprland: HyprlandConfig::default(),
            actions: ActionsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub title: Option<String>,
    pub start_page: Option<String>,
    pub color_scheme: Option<String>,

    /// Optional [api] section
    pub api: Option<FileApi>,

    /// Optional [refresh] section
    pub refresh: Option<FileRefresh>,

    /// Optional [hyprland] section
    pub hyprland: Option<FileHyprland>,

    /// Optional [actions] section
    pub actions: Option<FileActions>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Environment overrides, captured once so resolution stays pure
#[derive(Debug, Default)]
pub(crate) struct EnvOverrides {
    pub bind: Option<String>,
    pub no_tui: Option<String>,
    pub theme: Option<String>,
    pub start_page: Option<String>,
}

impl EnvOverrides {
    fn capture() -> Self {
        Self {
            bind: std::env::var("HYPRSPA_BIND").ok(),
            no_tui: std::env::var("HYPRSPA_NO_TUI").ok(),
            theme: std::env::var("HYPRSPA_THEME").ok(),
            start_page: std::env::var("HYPRSPA_START_PAGE").ok(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/hyprspa/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("hyprspa").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with defaults. Returns the path written.
    pub fn reset_file() -> anyhow::Result<PathBuf> {
        use anyhow::Context;

        let path = Self::config_path().context("Could not determine home directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be parsed: a broken
    /// config fails fast rather than silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `hyprspa config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), EnvOverrides::capture())
    }

    /// Merge the file layer and the environment layer over the defaults
    pub(crate) fn resolve(file: FileConfig, env: EnvOverrides) -> Self {
        let title = file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());

        // Start page: env > file > default
        let start_page = env
            .start_page
            .or(file.start_page)
            .unwrap_or_else(|| DEFAULT_START_PAGE.to_string());

        // Color scheme: env > file > default
        let color_scheme = env
            .theme
            .or(file.color_scheme)
            .map(|s| ColorScheme::parse(&s))
            .unwrap_or_default();

        // TUI toggle: env only (runtime flag)
        let enable_tui = env
            .no_tui
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        Self {
            title,
            start_page,
            color_scheme,
            enable_tui,
            api: ApiConfig::from_file(file.api, env.bind),
            refresh: RefreshConfig::from_file(file.refresh),
            hyprland: HyprlandConfig::from_file(file.hyprland),
            actions: ActionsConfig::from_file(file.actions),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
