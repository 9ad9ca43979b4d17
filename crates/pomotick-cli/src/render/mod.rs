//! Terminal-side event listeners.
//!
//! Each listener keeps its own [`View`], folded from the events it receives.
//! None of them can reach back into the timer.

mod bell;
mod display;
mod title;

pub use bell::Bell;
pub use display::StatusLine;
pub use title::TitleBar;

use pomotick_core::timer::round_in_cycle;
use pomotick_core::{Event, Mode};

const BAR_WIDTH: usize = 20;

/// `MM:SS`. Minutes are not capped at 59.
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// What a listener knows about the timer, rebuilt from events alone.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub mode: Mode,
    pub remaining_secs: u64,
    pub session_total_secs: u64,
    pub completed_work_sessions: u32,
    pub rounds_per_long_break: u32,
    pub running: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: 0,
            session_total_secs: 0,
            completed_work_sessions: 0,
            rounds_per_long_break: 1,
            running: false,
        }
    }
}

impl View {
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::TimerStarted { mode, remaining_secs, .. } => {
                self.mode = *mode;
                self.remaining_secs = *remaining_secs;
                self.running = true;
            }
            Event::TimerPaused { mode, remaining_secs, .. } => {
                self.mode = *mode;
                self.remaining_secs = *remaining_secs;
                self.running = false;
            }
            Event::TimerReset { session_total_secs, .. } => {
                self.mode = Mode::Work;
                self.remaining_secs = *session_total_secs;
                self.session_total_secs = *session_total_secs;
                self.completed_work_sessions = 0;
                self.running = false;
            }
            Event::Tick {
                mode,
                remaining_secs,
                session_total_secs,
                ..
            } => {
                self.mode = *mode;
                self.remaining_secs = *remaining_secs;
                self.session_total_secs = *session_total_secs;
            }
            Event::ModeChanged {
                to,
                session_total_secs,
                completed_work_sessions,
                ..
            } => {
                self.mode = *to;
                self.remaining_secs = *session_total_secs;
                self.session_total_secs = *session_total_secs;
                self.completed_work_sessions = *completed_work_sessions;
            }
            Event::ConfigUpdated {
                rounds_per_long_break,
                session_total_secs,
                ..
            } => {
                self.mode = Mode::Work;
                self.remaining_secs = *session_total_secs;
                self.session_total_secs = *session_total_secs;
                self.completed_work_sessions = 0;
                self.rounds_per_long_break = *rounds_per_long_break;
                self.running = false;
            }
            Event::StateSnapshot {
                mode,
                running,
                remaining_secs,
                session_total_secs,
                completed_work_sessions,
                rounds_per_long_break,
                ..
            } => {
                *self = View {
                    mode: *mode,
                    remaining_secs: *remaining_secs,
                    session_total_secs: *session_total_secs,
                    completed_work_sessions: *completed_work_sessions,
                    rounds_per_long_break: *rounds_per_long_break,
                    running: *running,
                };
            }
        }
    }

    pub fn round_in_cycle(&self) -> u32 {
        round_in_cycle(self.completed_work_sessions, self.rounds_per_long_break)
    }

    pub fn progress_bar(&self) -> String {
        let filled = if self.session_total_secs == 0 {
            0
        } else {
            let elapsed = self.session_total_secs - self.remaining_secs.min(self.session_total_secs);
            (elapsed as usize * BAR_WIDTH) / self.session_total_secs as usize
        };
        format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    /// The single status line drawn by [`StatusLine`].
    pub fn status_line(&self, show_progress: bool) -> String {
        let mut line = format!(
            "{:<11} {}",
            self.mode.label(),
            format_time(self.remaining_secs)
        );
        if show_progress {
            line.push_str(&format!("  [{}]", self.progress_bar()));
        }
        line.push_str(&format!(
            "  Round {} / {}",
            self.round_in_cycle(),
            self.rounds_per_long_break
        ));
        if !self.running {
            line.push_str("  (paused)");
        }
        line
    }
}
