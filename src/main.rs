use docsite::adapters::{EnvColorScheme, TerminalViewport};
use docsite::app::App;
use docsite::config::SiteConfig;
use docsite::error::DocsiteResult;
use docsite::terminal::{setup_panic_hook, TerminalManager};
use docsite::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log to `<cache dir>/docsite/docsite.log`; stdout belongs to the UI.
///
/// Filter comes from `DOCSITE_LOG`, default `info`. Logging is skipped if the
/// file cannot be created.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("docsite")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("docsite.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_env("DOCSITE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::args().any(|a| a == "--version" || a == "-V") {
        println!("docsite {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_logging();

    let config_path = std::env::args().skip_while(|a| a != "--config").nth(1);
    let (host, mut app) = build_app(config_path.as_deref()).inspect_err(|e| {
        tracing::error!(code = e.error_code(), "Startup failed: {}", e);
    })?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    app.mount();
    let result = run(&mut manager, &mut app, &host).await;
    app.unmount();

    manager.restore();
    result
}

fn build_app(config_path: Option<&str>) -> DocsiteResult<(Rc<TerminalViewport>, App)> {
    let config = match config_path {
        Some(path) => SiteConfig::load_from(std::path::Path::new(path))?,
        None => SiteConfig::load()?,
    };
    tracing::info!(version = VERSION, ?config, "starting");

    let host = Rc::new(TerminalViewport::detect(config.cell_width_px)?);
    let color_scheme = Rc::new(EnvColorScheme::from_env());
    let app = App::new(config, host.clone(), color_scheme)?;
    Ok((host, app))
}

async fn run(manager: &mut TerminalManager, app: &mut App, host: &TerminalViewport) -> Result<()> {
    let mut events = EventStream::new();

    while app.is_running() {
        manager.terminal().draw(|frame| ui::render(frame, app))?;

        match events.next().await {
            Some(Ok(Event::Resize(columns, rows))) => host.handle_resize(columns, rows),
            Some(Ok(Event::Key(key))) => app.handle_key(key),
            Some(Ok(Event::FocusGained)) => app.handle_focus_gained(),
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                tracing::error!("Terminal event error: {}", e);
                return Err(e.into());
            }
            None => break,
        }
    }

    Ok(())
}
