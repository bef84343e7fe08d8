use crate::shutdown::ShutdownHandle;
use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

/// Reads terminal events on a background thread and forwards them.
///
/// The thread never touches application state; everything it produces is
/// consumed on the main loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }

                    // Short poll so the shutdown flag is checked frequently.
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(event) => {
                                if !forward(&tx, event) {
                                    break;
                                }
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "failed to read terminal event");
                                break;
                            }
                        },
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "failed to poll terminal events");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Pass a terminal event to the main loop. Returns `false` once the
/// receiving side is gone.
fn forward(tx: &Sender<AppEvent>, event: Event) -> bool {
    let app_event = match event {
        Event::Key(key) => AppEvent::Key(key),
        Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
        _ => return true,
    };
    tx.send(app_event).is_ok()
}
