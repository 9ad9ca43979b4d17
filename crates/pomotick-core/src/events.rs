use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the timer produces an Event.
/// Listeners (display, bell, title bar) consume them; none of them feed back
/// into timer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        session_total_secs: u64,
        at: DateTime<Utc>,
    },
    /// One second elapsed without a mode change.
    Tick {
        mode: Mode,
        remaining_secs: u64,
        session_total_secs: u64,
        at: DateTime<Utc>,
    },
    /// A session ran out and the timer switched to the next mode.
    ModeChanged {
        from: Mode,
        to: Mode,
        session_total_secs: u64,
        completed_work_sessions: u32,
        at: DateTime<Utc>,
    },
    /// Interval lengths changed; the timer was reset to a fresh Work session.
    ConfigUpdated {
        work_min: u32,
        short_break_min: u32,
        long_break_min: u32,
        rounds_per_long_break: u32,
        session_total_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        running: bool,
        remaining_secs: u64,
        session_total_secs: u64,
        completed_work_sessions: u32,
        round_in_cycle: u32,
        rounds_per_long_break: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_mode_change(&self) -> bool {
        matches!(self, Event::ModeChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_snake_case_tag() {
        let ev = Event::ModeChanged {
            from: Mode::Work,
            to: Mode::ShortBreak,
            session_total_secs: 300,
            completed_work_sessions: 1,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "mode_changed");
        assert_eq!(json["to"], "short_break");
        assert_eq!(json["session_total_secs"], 300);
        assert!(ev.is_mode_change());
    }
}
