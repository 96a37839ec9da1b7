use crate::api::DirectoryClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::spawn_fetcher;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use reqwest::Url;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the directory TUI until the user quits.
pub fn run(config: Config, initial_page: u32) -> anyhow::Result<()> {
    let base_url = Url::parse(&config.api.base_url)
        .with_context(|| format!("invalid base url '{}'", config.api.base_url))?;
    let client = DirectoryClient::new(base_url)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    tracing::info!(base_url = %client.base_url(), initial_page, "starting directory view");

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let fetcher = spawn_fetcher(runtime.handle(), client, events.sender());

    let mut app = App::new(initial_page);
    app.set_fetch_sender(fetcher);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Redraw only; keeps the loading marker current
            Ok(AppEvent::Tick) => {}
            // Next draw picks up the new size
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::PageFetched { request_id, result }) => {
                app.on_page_fetched(request_id, result)
            }
            Ok(AppEvent::TotalFetched { result }) => app.on_total_fetched(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight requests are abandoned, not awaited.
    runtime.shutdown_background();
    tracing::info!("directory view closed");
    Ok(())
}
