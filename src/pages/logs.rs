use crate::hyprland::DesktopSnapshot;
use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::shell::{Element, Page, PageAction};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

/// Entries shown at once, newest first
const VISIBLE_ENTRIES: usize = 200;

/// Recent application log lines from the in-memory buffer
pub struct LogsPage {
    buffer: LogBuffer,
    content: Vec<Element>,
}

impl LogsPage {
    pub fn new(buffer: LogBuffer) -> Self {
        let mut page = Self {
            buffer,
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn rebuild(&mut self) {
        let entries = self.buffer.snapshot();
        let mut content = vec![
            Element::heading("Logs"),
            Element::dim(format!("{} entries in buffer", entries.len())),
            Element::Blank,
        ];

        if entries.is_empty() {
            content.push(Element::dim("No log entries yet"));
        }

        content.extend(entries.iter().rev().take(VISIBLE_ENTRIES).map(line));
        self.content = content;
    }
}

fn line(entry: &LogEntry) -> Element {
    let text = format!(
        "{} {:<5} {}: {}",
        entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    );
    match entry.level {
        LogLevel::Error | LogLevel::Warn => Element::error(text),
        LogLevel::Info => Element::text(text),
        LogLevel::Debug | LogLevel::Trace => Element::dim(text),
    }
}

/// `hyprspa::pages::home` -> `pages::home`
fn short_target(target: &str) -> &str {
    target.strip_prefix("hyprspa::").unwrap_or(target)
}

impl Page for LogsPage {
    fn title(&self) -> &str {
        "Logs"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    fn on_show(&mut self) {
        self.rebuild();
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char('r') => {
                self.rebuild();
                PageAction::Consumed
            }
            _ => PageAction::Ignored,
        }
    }

    // Refresh ticks keep the view live
    fn apply_snapshot(&mut self, _snapshot: &DesktopSnapshot) {
        self.rebuild();
    }

    fn hint(&self) -> Option<&'static str> {
        Some("r: reload")
    }
}
