// Content component
//
// Renders the visible page's display tree. Sections become a bold title
// followed by their children, indented one level.

use crate::shell::Element;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let title = app
        .shell
        .current_page()
        .map(|p| format!(" {} ", p.title()))
        .unwrap_or_default();

    let paragraph = Paragraph::new(lines(app.shell.visible_content(), theme))
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(title),
        );

    f.render_widget(paragraph, area);
}

/// Convert a display tree into styled lines
pub fn lines(elements: &[Element], theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for element in elements {
        push_element(&mut out, element, theme, 0);
    }
    out
}

fn push_element(out: &mut Vec<Line<'static>>, element: &Element, theme: &Theme, depth: usize) {
    let pad = "  ".repeat(depth);

    match element {
        Element::Heading(text) => out.push(Line::from(Span::styled(
            format!("{}{}", pad, text),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        ))),
        Element::Text(text) => {
            for line in text.lines() {
                out.push(Line::from(format!("{}{}", pad, line)));
            }
        }
        Element::Dim(text) => {
            for line in text.lines() {
                out.push(Line::from(Span::styled(
                    format!("{}{}", pad, line),
                    Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
                )));
            }
        }
        Element::Field { label, value } => out.push(Line::from(vec![
            Span::styled(
                format!("{}{}: ", pad, label),
                Style::default().fg(theme.label),
            ),
            Span::raw(value.clone()),
        ])),
        Element::Error(text) => out.push(Line::from(Span::styled(
            format!("{}✗ {}", pad, text),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))),
        Element::Item { text, selected } => {
            let line = if *selected {
                Span::styled(
                    format!("{}▸ {}", pad, text),
                    Style::default()
                        .fg(theme.selected_fg)
                        .bg(theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!("{}  {}", pad, text))
            };
            out.push(Line::from(line));
        }
        Element::Section { title, children } => {
            out.push(Line::from(Span::styled(
                format!("{}{}", pad, title),
                Style::default()
                    .fg(theme.section)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            for child in children {
                push_element(out, child, theme, depth + 1);
            }
            out.push(Line::default());
        }
        Element::Blank => out.push(Line::default()),
    }
}
