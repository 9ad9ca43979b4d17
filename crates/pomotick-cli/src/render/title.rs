use std::io::Write;

use crossterm::{execute, terminal::SetTitle};
use pomotick_core::{Event, EventListener};

use super::{format_time, View};

/// Window title: the countdown followed by the app name.
pub fn title_text(view: &View) -> String {
    format!("{} — Pomodoro", format_time(view.remaining_secs))
}

/// Mirrors the countdown into the terminal title.
pub struct TitleBar<W: Write> {
    out: W,
    view: View,
    last: String,
}

impl<W: Write> TitleBar<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: View::default(),
            last: String::new(),
        }
    }
}

impl<W: Write> EventListener for TitleBar<W> {
    fn on_event(&mut self, event: &Event) {
        self.view.apply(event);
        let title = title_text(&self.view);
        if title == self.last {
            return;
        }
        if let Err(e) = execute!(self.out, SetTitle(&title)) {
            tracing::debug!("title write failed: {e}");
        }
        self.last = title;
    }
}
