use crate::config::Config;
use crate::error::AppError;
use crate::profile::{ProfileSink, ProfileViewModel};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

/// Run the UI until the user quits or a termination signal arrives.
pub fn run(config: &Config) -> Result<(), AppError> {
    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;

    let tick_rate = config.ui.tick_rate();
    let sink: Arc<dyn ProfileSink> = Arc::new(ProfileViewModel::new());
    let mut app = App::new(&config.ui, sink);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.clone())?;
    tracing::info!(start = %app.current(), "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("termination signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
