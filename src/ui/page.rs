//! Page body.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::app::App;

pub fn render_page(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let page = app.current_page();
    let lines = vec![
        Line::from(Span::styled(
            page.title(),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.router().current_path(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(page.summary(), Style::default().fg(palette.foreground))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Shown until the viewport has been measured.
pub fn render_pending(frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = Line::from(Span::styled(
        "Measuring viewport…",
        Style::default().fg(palette.muted),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
