use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::loader::ViewLoader;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI loop on the calling thread until the user quits.
///
/// Fetches are spawned on `runtime` and report back through the event
/// channel, so all state changes happen here.
pub fn run(config: &Config, start: Route, client: CatalogClient, runtime: Handle) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(config);
    app.set_loader(ViewLoader::new(Arc::new(client), runtime, events.sender()));
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    info!(route = %start, "Starting UI");
    app.navigate(start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    guard.restore();
    info!("UI stopped");
    Ok(())
}
