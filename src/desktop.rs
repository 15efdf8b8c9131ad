// Desktop actions - notifications and screenshots
//
// Thin wrappers around `notify-send`, `grim` and `scrot`. Each action
// returns a user-facing status line; failures never propagate.

use crate::hyprland::{CommandRunner, SystemRunner};
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs one-shot desktop utilities and reports the outcome as text
#[derive(Clone)]
pub struct DesktopActions {
    runner: Arc<dyn CommandRunner>,
    screenshot_dir: PathBuf,
}

impl DesktopActions {
    pub fn new(screenshot_dir: impl Into<PathBuf>) -> Self {
        Self::with_runner(Arc::new(SystemRunner), screenshot_dir)
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>, screenshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            screenshot_dir: screenshot_dir.into(),
        }
    }

    pub fn screenshot_dir(&self) -> &Path {
        &self.screenshot_dir
    }

    /// Send a desktop notification through `notify-send`
    pub fn send_notification(&self, title: &str, body: &str) -> String {
        match self.runner.run("notify-send", &[title, body]) {
            Ok(output) if output.success => {
                tracing::info!("Notification sent");
                "Notification sent!".to_string()
            }
            Ok(output) => {
                tracing::warn!("notify-send failed: {}", output.stderr.trim());
                "Failed to send notification (is notify-send installed?)".to_string()
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                "notify-send not found. Install libnotify.".to_string()
            }
            Err(e) => {
                tracing::warn!("Could not run notify-send: {}", e);
                "Failed to send notification (is notify-send installed?)".to_string()
            }
        }
    }

    /// Capture the screen with `grim`, falling back to `scrot`
    pub fn take_screenshot(&self) -> String {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let dir = self.screenshot_dir.display().to_string();

        let grim_path = self.screenshot_dir.join(format!("hyprspa-{}.png", stamp));
        let grim = self.capture("grim", &grim_path);
        if matches!(grim, Capture::Saved) {
            tracing::info!("Screenshot saved to {}", grim_path.display());
            return format!("Screenshot saved to {}", dir);
        }

        let scrot_path = self.screenshot_dir.join(format!("hyprspa-{}-scrot.png", stamp));
        let scrot = self.capture("scrot", &scrot_path);
        match (grim, scrot) {
            (_, Capture::Saved) => {
                tracing::info!("Screenshot saved to {}", scrot_path.display());
                format!("Screenshot saved to {} (using scrot)", dir)
            }
            (Capture::Missing, Capture::Missing) => {
                "Screenshot tool not found (install grim or scrot)".to_string()
            }
            _ => "Screenshot failed (install grim or scrot)".to_string(),
        }
    }

    fn capture(&self, tool: &str, path: &Path) -> Capture {
        let target = path.to_string_lossy();
        match self.runner.run(tool, &[target.as_ref()]) {
            Ok(output) if output.success => Capture::Saved,
            Ok(output) => {
                tracing::debug!("{} failed: {}", tool, output.stderr.trim());
                Capture::Failed
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Capture::Missing,
            Err(e) => {
                tracing::debug!("Could not run {}: {}", tool, e);
                Capture::Failed
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Saved,
    Failed,
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyprland::fake::FakeRunner;

    fn actions(runner: FakeRunner) -> DesktopActions {
        DesktopActions::with_runner(Arc::new(runner), "/tmp")
    }

    #[test]
    fn notification_reports_each_outcome() {
        let sent = actions(FakeRunner::new().accept_all());
        assert_eq!(sent.send_notification("t", "b"), "Notification sent!");

        let failed = actions(FakeRunner::new().fail("notify-send t b", "no daemon"));
        assert_eq!(
            failed.send_notification("t", "b"),
            "Failed to send notification (is notify-send installed?)"
        );

        let missing = actions(FakeRunner::new());
        assert_eq!(
            missing.send_notification("t", "b"),
            "notify-send not found. Install libnotify."
        );
    }

    #[test]
    fn screenshot_prefers_grim() {
        let runner = FakeRunner::new().accept_all();
        let calls = runner.calls();

        assert_eq!(actions(runner).take_screenshot(), "Screenshot saved to /tmp");
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("grim /tmp/hyprspa-"));
    }

    #[test]
    fn screenshot_without_any_tool() {
        // Unscripted commands behave as missing binaries
        assert_eq!(
            actions(FakeRunner::new()).take_screenshot(),
            "Screenshot tool not found (install grim or scrot)"
        );
    }
}
