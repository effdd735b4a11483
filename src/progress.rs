//! Terminal activity indicator shown while a search runs.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::search::CancelToken;

const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const TICK: Duration = Duration::from_millis(80);

/// The line drawn on the `tick`-th redraw.
pub fn frame(tick: usize, message: &str) -> String {
    format!("\r{} {}", FRAMES[tick % FRAMES.len()], message)
}

/// Blanks out whatever [`frame`] drew for `message`.
pub fn clear(message: &str) -> String {
    format!("\r{}\r", " ".repeat(message.chars().count() + 2))
}

fn draw(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Redraws a spinner on a background thread until finished or dropped.
pub struct Spinner {
    stop: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Spin on stderr.
    pub fn new(message: impl Into<String>) -> Self {
        Self::start(io::stderr(), message)
    }

    pub fn start<W>(mut out: W, message: impl Into<String>) -> Self
    where
        W: Write + Send + 'static,
    {
        let message = message.into();
        let stop = CancelToken::new();
        let stopped = stop.clone();
        let handle = thread::spawn(move || {
            let mut tick = 0;
            while !stopped.is_cancelled() {
                // A closed terminal just ends the animation
                if draw(&mut out, &frame(tick, &message)).is_err() {
                    return;
                }
                thread::sleep(TICK);
                tick += 1;
            }
            let _ = draw(&mut out, &clear(&message));
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop spinning and wait until the line has been cleared.
    pub fn finish(mut self) {
        self.stop.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}
