use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent};
use tracing::warn;

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Reads the terminal on a background thread and interleaves key events with
/// a steady tick. Held keys never starve the tick: the poll timeout shrinks
/// to whatever is left of the current frame.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        // Press, repeat and release all matter for held movement.
                        Ok(crossterm::event::Event::Key(key)) => {
                            if tx.send(Event::Key(key)).is_err() {
                                return;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => warn!(error = %e, "failed to read terminal event"),
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!(error = %e, "failed to poll terminal, stopping input thread");
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
