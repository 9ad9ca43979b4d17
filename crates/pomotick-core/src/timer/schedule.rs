use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Interval lengths for one Pomodoro cycle.
///
/// Every field is a positive integer. The only way to build one is
/// [`TimerConfig::new`] (or `Default`), so the engine never sees a zero
/// duration or a zero round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerConfig {
    work_min: u32,
    short_break_min: u32,
    long_break_min: u32,
    rounds_per_long_break: u32,
}

impl TimerConfig {
    /// Validate and build a config.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the first field that
    /// is zero. Field names match the `[schedule]` keys of the settings file.
    pub fn new(
        work_min: u32,
        short_break_min: u32,
        long_break_min: u32,
        rounds_per_long_break: u32,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("focus_duration", work_min),
            ("short_break", short_break_min),
            ("long_break", long_break_min),
            ("pomodoros_before_long_break", rounds_per_long_break),
        ] {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: "must be a positive integer".into(),
                });
            }
        }
        Ok(Self {
            work_min,
            short_break_min,
            long_break_min,
            rounds_per_long_break,
        })
    }

    pub fn work_min(&self) -> u32 {
        self.work_min
    }

    pub fn short_break_min(&self) -> u32 {
        self.short_break_min
    }

    pub fn long_break_min(&self) -> u32 {
        self.long_break_min
    }

    pub fn rounds_per_long_break(&self) -> u32 {
        self.rounds_per_long_break
    }

    /// Configured minutes for `mode`.
    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_min,
            Mode::ShortBreak => self.short_break_min,
            Mode::LongBreak => self.long_break_min,
        }
    }

    /// Configured duration for `mode` in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self, mode: Mode) -> u64 {
        u64::from(self.minutes(mode)).saturating_mul(60)
    }

    /// The break that follows the `completed`-th work session.
    pub fn break_after(&self, completed: u32) -> Mode {
        if completed % self.rounds_per_long_break == 0 {
            Mode::LongBreak
        } else {
            Mode::ShortBreak
        }
    }

    /// One full cycle: each work session followed by its break, ending with
    /// the long break.
    pub fn cycle(&self) -> Vec<Mode> {
        (1..=self.rounds_per_long_break)
            .flat_map(|n| [Mode::Work, self.break_after(n)])
            .collect()
    }

    /// Total minutes of one full cycle.
    pub fn cycle_duration_min(&self) -> u64 {
        self.cycle().into_iter().map(|m| u64::from(self.minutes(m))).sum()
    }
}

/// Position of the latest completed work session within its long-break
/// cycle: 0 before the first one, then 1..=rounds.
pub fn round_in_cycle(completed: u32, rounds: u32) -> u32 {
    match (completed, rounds) {
        (0, _) | (_, 0) => 0,
        (n, r) => (n - 1) % r + 1,
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_min: 25,
            short_break_min: 5,
            long_break_min: 15,
            rounds_per_long_break: 4,
        }
    }
}
