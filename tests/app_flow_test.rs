// End-to-end flow: mount the shell, resize across the breakpoint, render.

use std::rc::Rc;

use docsite::adapters::mock::{MockColorScheme, MockViewport};
use docsite::app::App;
use docsite::config::SiteConfig;
use docsite::router::Page;
use docsite::ui::{self, LayoutMode};
use docsite::viewport::InitPolicy;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 18)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_resize_switches_layout_while_mounted() {
    let host = MockViewport::shared(1280);
    let mut app = App::new(
        SiteConfig::default().with_start_path("/docs/markers"),
        host.clone(),
        Rc::new(MockColorScheme::new(false)),
    )
    .unwrap();

    app.mount();
    assert_eq!(app.layout_mode(), LayoutMode::Sidebar);
    assert!(screen(&app).contains("Advanced Usage"));

    host.set_width(600);
    assert_eq!(app.layout_mode(), LayoutMode::Stacked);
    let text = screen(&app);
    assert!(text.contains("(5/11)"));
    assert!(text.contains("Markers"));

    app.unmount();
    host.set_width(1280);
    assert_eq!(app.layout_mode(), LayoutMode::Stacked);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_eager_shell_renders_before_mount() {
    let host = MockViewport::shared(1280);
    let app = App::new(
        SiteConfig::default().with_viewport_init(InitPolicy::Eager),
        host,
        Rc::new(MockColorScheme::new(true)),
    )
    .unwrap();

    assert_eq!(app.layout_mode(), LayoutMode::Sidebar);
    assert!(!screen(&app).contains("Measuring viewport"));
}

#[test]
fn test_dark_toggle_reflected_in_header() {
    let host = MockViewport::shared(1280);
    let mut app = App::new(
        SiteConfig::default(),
        host,
        Rc::new(MockColorScheme::new(true)),
    )
    .unwrap();
    app.mount();

    assert!(screen(&app).contains("dark"));
    app.toggle_dark();
    assert!(screen(&app).contains("light"));
    assert_eq!(app.current_page(), Page::Home);
}
