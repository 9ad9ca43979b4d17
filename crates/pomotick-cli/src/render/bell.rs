use std::io::Write;

use notify_rust::Notification;
use pomotick_core::{Event, EventListener, Mode};

/// Sound (and optionally a desktop notification) on every mode switch.
pub struct Bell<W: Write> {
    out: W,
    desktop: bool,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W, desktop: bool) -> Self {
        Self { out, desktop }
    }
}

pub fn announcement(to: Mode, minutes: u64) -> String {
    match to {
        Mode::Work => format!("Back to work: {minutes} min"),
        Mode::ShortBreak => format!("Short break: {minutes} min"),
        Mode::LongBreak => format!("Long break: {minutes} min"),
    }
}

impl<W: Write> EventListener for Bell<W> {
    fn on_event(&mut self, event: &Event) {
        let Event::ModeChanged {
            to,
            session_total_secs,
            ..
        } = event
        else {
            return;
        };

        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::debug!("bell write failed: {e}");
        }

        if self.desktop {
            let body = announcement(*to, session_total_secs / 60);
            if let Err(e) = Notification::new().summary("Pomotick").body(&body).show() {
                tracing::warn!("desktop notification failed: {e}");
            }
        }
    }
}
