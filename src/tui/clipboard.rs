//! Clipboard helper for copying page text to the system clipboard
//!
//! Uses `arboard`; on Wayland it talks to the compositor's data device.
//! The clipboard is created fresh each time to avoid holding resources.

use crate::shell::{to_plain_text, Element};
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when no display server is reachable (headless sessions, SSH).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Plain-text form of a page: window title line, then the content tree
pub fn page_text(title: &str, content: &[Element]) -> String {
    format!("{}\n\n{}", title, to_plain_text(content))
}
