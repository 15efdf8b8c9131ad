//! Hyprland integration through `hyprctl`
//!
//! Every query follows the same contract: run `hyprctl <query> -j`, parse
//! the JSON, and fold *any* failure (binary missing, non-zero exit, bad
//! JSON) into a single "unavailable" result. Nothing here panics or
//! propagates an error to the UI; failures are logged at debug level.

mod models;
mod runner;

#[cfg(test)]
pub mod fake;

pub use models::{DesktopSnapshot, HyprStatus, Monitor, Window, Workspace};
pub use runner::{CommandRunner, SystemRunner};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Environment variable Hyprland sets for every client it spawns
pub const INSTANCE_SIGNATURE_VAR: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Default name of the control binary
pub const DEFAULT_BINARY: &str = "hyprctl";

/// True when this process runs inside a Hyprland session
pub fn running_under_hyprland() -> bool {
    std::env::var_os(INSTANCE_SIGNATURE_VAR).is_some()
}

/// Client for the Hyprland control tool
#[derive(Clone)]
pub struct Hyprctl {
    binary: String,
    runner: Arc<dyn CommandRunner>,
    session: bool,
}

impl std::fmt::Debug for Hyprctl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hyprctl")
            .field("binary", &self.binary)
            .field("session", &self.session)
            .finish()
    }
}

impl Hyprctl {
    /// Client for the host system. Session detection reads the environment.
    pub fn detect(binary: impl Into<String>) -> Self {
        Self::with_runner(binary, Arc::new(SystemRunner), running_under_hyprland())
    }

    /// Client with an explicit runner and session flag
    pub fn with_runner(
        binary: impl Into<String>,
        runner: Arc<dyn CommandRunner>,
        session: bool,
    ) -> Self {
        Self {
            binary: binary.into(),
            runner,
            session,
        }
    }

    /// Whether a Hyprland session was detected
    pub fn is_hyprland(&self) -> bool {
        self.session
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run `hyprctl <args..> -j` and parse stdout
    fn query<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        if !self.session {
            bail!("not running under Hyprland");
        }

        let mut full: Vec<&str> = args.to_vec();
        full.push("-j");

        let output = self
            .runner
            .run(&self.binary, &full)
            .with_context(|| format!("failed to run {}", self.binary))?;

        if !output.success {
            bail!(
                "{} {} exited with failure: {}",
                self.binary,
                args.join(" "),
                output.stderr.trim()
            );
        }

        serde_json::from_str(&output.stdout)
            .with_context(|| format!("invalid JSON from {} {}", self.binary, args.join(" ")))
    }

    /// Fold a query result into `Option`, logging the reason on failure
    fn absorb<T>(&self, what: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("hyprctl {} unavailable: {:#}", what, e);
                None
            }
        }
    }

    /// Active workspace and monitor list, or `None` if unavailable
    pub fn status(&self) -> Option<HyprStatus> {
        let workspace = self.absorb("activeworkspace", self.query(&["activeworkspace"]))?;
        let monitors = self.absorb("monitors", self.query(&["monitors"]))?;
        Some(HyprStatus {
            workspace,
            monitors,
        })
    }

    /// All workspaces (empty when unavailable)
    pub fn workspaces(&self) -> Vec<Workspace> {
        self.absorb("workspaces", self.query(&["workspaces"]))
            .unwrap_or_default()
    }

    /// All client windows (empty when unavailable)
    pub fn windows(&self) -> Vec<Window> {
        self.absorb("clients", self.query(&["clients"]))
            .unwrap_or_default()
    }

    /// All monitors (empty when unavailable)
    pub fn monitors(&self) -> Vec<Monitor> {
        self.absorb("monitors", self.query(&["monitors"]))
            .unwrap_or_default()
    }

    /// Gather everything the desktop pages show
    ///
    /// Monitors are queried once and shared with the status, so the monitor
    /// list survives a failing `activeworkspace` query.
    pub fn snapshot(&self) -> DesktopSnapshot {
        let monitors: Option<Vec<Monitor>> =
            self.absorb("monitors", self.query(&["monitors"]));
        let status = match (
            self.absorb("activeworkspace", self.query(&["activeworkspace"])),
            &monitors,
        ) {
            (Some(workspace), Some(monitors)) => Some(HyprStatus {
                workspace,
                monitors: monitors.clone(),
            }),
            _ => None,
        };

        DesktopSnapshot {
            status,
            monitors: monitors.unwrap_or_default(),
            workspaces: self.workspaces(),
            windows: self.windows(),
        }
    }

    /// Run `hyprctl dispatch <args..>`. Returns false on any failure.
    pub fn dispatch(&self, args: &[&str]) -> bool {
        if !self.session {
            tracing::debug!("Skipping dispatch {:?}: not running under Hyprland", args);
            return false;
        }

        let mut full = vec!["dispatch"];
        full.extend_from_slice(args);

        match self.runner.run(&self.binary, &full) {
            Ok(output) if output.success => {
                tracing::info!("Dispatched {}", args.join(" "));
                true
            }
            Ok(output) => {
                tracing::warn!(
                    "Dispatch {} failed: {}",
                    args.join(" "),
                    output.stderr.trim()
                );
                false
            }
            Err(e) => {
                tracing::warn!("Could not run {}: {}", self.binary, e);
                false
            }
        }
    }

    pub fn switch_workspace(&self, id: i64) -> bool {
        self.dispatch(&["workspace", &id.to_string()])
    }

    pub fn focus_window(&self, address: &str) -> bool {
        self.dispatch(&["focuswindow", &format!("address:{}", address)])
    }

    pub fn close_window(&self, address: &str) -> bool {
        self.dispatch(&["closewindow", &format!("address:{}", address)])
    }

    pub fn toggle_fullscreen(&self, address: &str) -> bool {
        self.dispatch(&["fullscreen", &format!("address:{}", address)])
    }

    pub fn move_window_to_workspace(&self, address: &str, workspace: i64) -> bool {
        self.dispatch(&[
            "movetoworkspace",
            &format!("{},address:{}", workspace, address),
        ])
    }
}
