use std::io::Write;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use pomotick_core::{Event, EventListener};

use super::View;

/// Redraws one terminal line on every event.
pub struct StatusLine<W: Write> {
    out: W,
    view: View,
    show_progress: bool,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W, show_progress: bool) -> Self {
        Self {
            out,
            view: View::default(),
            show_progress,
        }
    }

    fn draw(&mut self) -> std::io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(self.view.status_line(self.show_progress))
        )?;
        self.out.flush()
    }
}

impl<W: Write> EventListener for StatusLine<W> {
    fn on_event(&mut self, event: &Event) {
        self.view.apply(event);
        if let Err(e) = self.draw() {
            tracing::debug!("status line write failed: {e}");
        }
    }
}
