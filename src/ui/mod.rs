//! Terminal rendering for the documentation shell.
//!
//! The layout follows the viewport classification:
//!
//! - desktop: header, sidebar navigation beside the page, key hints
//! - mobile: one-line header, one-line navigation bar, the page
//! - unmeasured: header and a placeholder body
//!
//! Colors come from the dark-mode flag via [`Palette::for_dark`].

pub mod layout;
mod nav;
mod page;
pub mod theme;

pub use layout::{LayoutContext, LayoutMode, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use nav::{render_nav_bar, render_sidebar};
use page::{render_page, render_pending};

const SITE_TITLE: &str = "Map Docs";
const KEY_HINTS: &str = "j/k move · enter open · b/f history · d theme · q quit";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_dark(app.dark_mode().is_dark());
    let ctx = LayoutContext::new(area.width, area.height, app.layout_mode());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Length(ctx.nav_bar_height()),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], app, &ctx, &palette);

    match ctx.mode {
        LayoutMode::Sidebar => {
            let columns = Layout::horizontal([
                Constraint::Length(ctx.sidebar_width()),
                Constraint::Min(0),
            ])
            .split(chunks[2]);
            render_sidebar(frame, columns[0], app, &palette);
            render_page(frame, inset(columns[1]), app, &palette);
        }
        LayoutMode::Stacked => {
            render_nav_bar(frame, chunks[1], app, &palette);
            render_page(frame, chunks[2], app, &palette);
        }
        LayoutMode::Pending => render_pending(frame, inset(chunks[2]), &palette),
    }

    if ctx.mode != LayoutMode::Stacked {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(KEY_HINTS, Style::default().fg(palette.muted)))),
            chunks[3],
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext, palette: &Palette) {
    let scheme = if app.dark_mode().is_dark() { "dark" } else { "light" };
    let line = Line::from(vec![
        Span::styled(
            SITE_TITLE,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}  ·  {}", app.viewport_state(), scheme),
            Style::default().fg(palette.muted),
        ),
    ]);

    let paragraph = Paragraph::new(line);
    if ctx.mode == LayoutMode::Stacked {
        frame.render_widget(paragraph, area);
    } else {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border));
        frame.render_widget(paragraph.block(block), inset_top(area));
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1).min(area.right()),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

fn inset_top(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y.saturating_add(1).min(area.bottom()),
        width: area.width,
        height: area.height.saturating_sub(1),
    }
}
