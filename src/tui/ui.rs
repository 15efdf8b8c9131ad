// UI rendering - called once per frame
//
// Layout: title bar with navigation tabs, page content, status bar.
// Overlays (help, dialog, toast) draw last so they sit on top.

use super::app::App;
use super::components::{content, status_bar, title_bar};
use crate::shell::Dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HELP_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Next / previous page"),
    ("F1-F9", "Jump to page"),
    ("PgUp / PgDn", "Scroll page content"),
    ("y", "Copy page text to clipboard"),
    ("Esc", "Clear status message"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar + tabs
            Constraint::Min(3),    // Page content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    content::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if app.show_help {
        render_help(f, f.area(), app);
    }

    if let Some(dialog) = &app.dialog {
        render_dialog(f, f.area(), app, dialog);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<16}", key),
                    Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*what),
            ])
        })
        .collect();

    if let Some(hint) = app.page_hint() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  This page",
            Style::default().fg(theme.section).add_modifier(Modifier::BOLD),
        )));
        for part in hint.split("  ") {
            lines.push(Line::from(format!("  {}", part)));
        }
    }

    let popup = centered(area, 56, lines.len() as u16 + 2);

    let help = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.highlight))
                .title(" Help (any key to close) "),
        );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn render_dialog(f: &mut Frame, area: Rect, app: &App, dialog: &Dialog) {
    let theme = &app.theme;
    let border = if dialog.is_error {
        theme.error
    } else {
        theme.highlight
    };

    let mut lines: Vec<Line> = dialog
        .message
        .lines()
        .map(|line| Line::from(format!(" {}", line)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Press any key to close",
        Style::default().fg(theme.dim),
    )));

    let title = format!(" {} ", dialog.title);
    let widest = dialog
        .message
        .lines()
        .map(|line| line.width() + 1)
        .chain([title.width(), 23])
        .max()
        .unwrap_or(0);
    // Longer lines wrap inside the popup
    let width = (widest as u16 + 3).clamp(30, 72);
    let popup = centered(area, width, lines.len() as u16 + 2);

    let body = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border))
                .title(Span::styled(
                    title,
                    Style::default().fg(border).add_modifier(Modifier::BOLD),
                )),
        );

    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// Rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
