//! Timer engine implementation.
//!
//! The engine is a pure state machine. It never consults the clock to decide
//! timing (events carry a timestamp, nothing more) and owns no thread;
//! whoever holds it calls `tick()` once per elapsed second while it is
//! running (see [`super::TimerController`]).
//!
//! ## State Transitions
//!
//! ```text
//! Work -> ShortBreak -> Work -> ... -> Work -> LongBreak -> Work
//! ```
//!
//! A long break follows every `rounds_per_long_break`-th completed Work
//! session. There is no terminal state.
//!
//! ## Usage
//!
//! ```
//! use pomotick_core::{Mode, TimerConfig, TimerEngine};
//!
//! let mut engine = TimerEngine::new(TimerConfig::new(1, 5, 15, 4).unwrap());
//! engine.start();
//! for _ in 0..60 {
//!     engine.tick();
//! }
//! assert_eq!(engine.mode(), Mode::ShortBreak);
//! ```

use chrono::Utc;

use super::schedule::{round_in_cycle, Mode, TimerConfig};
use crate::events::Event;

/// Core timer engine.
///
/// Invariant: `remaining_secs <= session_total_secs`, and
/// `session_total_secs` is always the configured duration of `mode`.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfig,
    mode: Mode,
    remaining_secs: u64,
    session_total_secs: u64,
    completed_work_sessions: u32,
    running: bool,
}

impl TimerEngine {
    /// Create a stopped engine at the start of a Work session.
    pub fn new(config: TimerConfig) -> Self {
        let total = config.duration_secs(Mode::Work);
        Self {
            config,
            mode: Mode::Work,
            remaining_secs: total,
            session_total_secs: total,
            completed_work_sessions: 0,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn session_total_secs(&self) -> u64 {
        self.session_total_secs
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Completed rounds within the current long-break cycle.
    ///
    /// Counts 1..=rounds once a cycle is under way, so the long break shows
    /// the full count rather than wrapping to zero.
    pub fn round_in_cycle(&self) -> u32 {
        round_in_cycle(
            self.completed_work_sessions,
            self.config.rounds_per_long_break(),
        )
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            session_total_secs: self.session_total_secs,
            completed_work_sessions: self.completed_work_sessions,
            round_in_cycle: self.round_in_cycle(),
            rounds_per_long_break: self.config.rounds_per_long_break(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Returns `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Returns `None` if already paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop, clear the round counter and rewind to a full Work session.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.completed_work_sessions = 0;
        self.enter(Mode::Work);
        Event::TimerReset {
            session_total_secs: self.session_total_secs,
            at: Utc::now(),
        }
    }

    /// Advance by one second. Ignored while paused.
    ///
    /// The session that reaches zero switches mode within the same tick, so a
    /// session of `n` seconds takes exactly `n` ticks.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            if self.remaining_secs > 0 {
                return Some(Event::Tick {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    session_total_secs: self.session_total_secs,
                    at: Utc::now(),
                });
            }
        }
        Some(self.transition())
    }

    /// Replace the interval lengths. Any change forces a full reset.
    pub fn update_config(&mut self, config: TimerConfig) -> Event {
        self.config = config;
        self.reset();
        Event::ConfigUpdated {
            work_min: config.work_min(),
            short_break_min: config.short_break_min(),
            long_break_min: config.long_break_min(),
            rounds_per_long_break: config.rounds_per_long_break(),
            session_total_secs: self.session_total_secs,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self) -> Event {
        let from = self.mode;
        let to = match from {
            Mode::Work => {
                self.completed_work_sessions = self.completed_work_sessions.saturating_add(1);
                self.config.break_after(self.completed_work_sessions)
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };
        self.enter(to);
        Event::ModeChanged {
            from,
            to,
            session_total_secs: self.session_total_secs,
            completed_work_sessions: self.completed_work_sessions,
            at: Utc::now(),
        }
    }

    fn enter(&mut self, mode: Mode) {
        self.mode = mode;
        self.session_total_secs = self.config.duration_secs(mode);
        self.remaining_secs = self.session_total_secs;
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
