//! Navigation: sidebar for the desktop layout, one-line bar for mobile.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::app::App;

/// Full page list with the selection highlighted and the open page marked.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let current = app.current_page();
    let lines: Vec<Line> = app
        .router()
        .table()
        .routes()
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let marker = if route.page == current { "● " } else { "  " };
            let mut style = Style::default().fg(palette.foreground);
            if route.page == current {
                style = style.fg(palette.accent).add_modifier(Modifier::BOLD);
            }
            if i == app.selected_index() {
                style = style.bg(palette.selection);
            }
            Line::from(Span::styled(format!("{}{}", marker, route.page.title()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// `‹ Markers (5/11) ›` style bar showing the selected entry.
pub fn render_nav_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let routes = app.router().table().routes();
    let selected = app.selected_index();
    let title = routes
        .get(selected)
        .map(|r| r.page.title())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled("‹ ", Style::default().fg(palette.muted)),
        Span::styled(
            title.to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({}/{}) ›", selected + 1, routes.len()),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
