//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Generate TOML representation of config
    pub fn to_toml(&self) -> String {
        format!(
            r#"# hyprspa configuration

# Title shown in the title bar as "<title> - <page>"
title = "{title}"

# Page shown at startup: home, workspaces, windows, monitors, actions,
# settings, logs, about
start_page = "{start_page}"

# Color scheme: system, light, dark
color_scheme = "{scheme}"

# HTTP endpoint (GET /api/hello)
[api]
enabled = {api_enabled}
bind_addr = "{api_bind}"

# Periodic refresh of the visible page
[refresh]
enabled = {refresh_enabled}
interval_secs = {refresh_interval}

[hyprland]
binary = "{hypr_binary}"

[actions]
screenshot_dir = "{screenshot_dir}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            title = escape(&self.title),
            start_page = escape(&self.start_page),
            scheme = self.color_scheme.as_str(),
            api_enabled = self.api.enabled,
            api_bind = self.api.bind_addr,
            refresh_enabled = self.refresh.enabled,
            refresh_interval = self.refresh.interval_secs,
            hypr_binary = escape(&self.hyprland.binary),
            screenshot_dir = escape(&self.actions.screenshot_dir.display().to_string()),
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
