// Status bar component
//
// Last status message on the left; auto-refresh state and key hints on
// the right. Hints shrink with the terminal width.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const GLOBAL_HINT: &str = "Tab: next  ?: help  y: copy  q: quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hint = right_text(app, bp);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(hint.width() as u16),
        ])
        .split(inner);

    let status = app.status.as_deref().unwrap_or("Ready");
    f.render_widget(
        Paragraph::new(format!(" {}", status)).style(Style::default().fg(theme.status_bar)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hint)),
        chunks[1],
    );
}

fn right_text(app: &App, bp: Breakpoint) -> String {
    let refresh = if app.auto_refresh() {
        format!("⟳ {}s", app.refresh_interval().as_secs())
    } else {
        "⏸".to_string()
    };

    let mut parts: Vec<String> = Vec::new();
    if bp.at_least(Breakpoint::Normal) {
        if let Some(hint) = app.page_hint() {
            parts.push(hint.to_string());
        }
    }
    if bp.at_least(Breakpoint::Wide) {
        parts.push(GLOBAL_HINT.to_string());
    }
    parts.push(refresh);
    format!("{} ", parts.join(" │ "))
}
