// Title bar component
//
// Window title ("{app} - {page}") on the border, navigation tabs inside.

use crate::shell::NavControl;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let tabs = Paragraph::new(tab_line(app.shell.controls(), theme, bp))
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title(Span::styled(
                    format!(" {} ", app.shell.title()),
                    Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
                ))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(tabs, area);
}

/// One span per navigation control; the active one is highlighted
fn tab_line(controls: &[NavControl], theme: &Theme, bp: Breakpoint) -> Line<'static> {
    let mut spans = Vec::with_capacity(controls.len() * 2);

    for (i, control) in controls.iter().enumerate() {
        if !control.active && !bp.at_least(Breakpoint::Normal) {
            continue;
        }

        let label = if bp.at_least(Breakpoint::Wide) {
            format!(" F{} {} ", i + 1, control.label)
        } else {
            format!(" {} ", control.label)
        };

        let style = if control.active {
            Style::default()
                .fg(theme.tab_active_fg)
                .bg(theme.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_inactive)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}
