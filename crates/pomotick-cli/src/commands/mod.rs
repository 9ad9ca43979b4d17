pub mod config;
pub mod run;
pub mod schedule;
pub mod simulate;

use clap::Args;
use pomotick_core::{Config, ConfigError, TimerConfig};

/// Per-invocation interval overrides. Never persisted.
#[derive(Args, Debug, Default, Clone)]
pub struct DurationOverrides {
    /// Work minutes
    #[arg(long)]
    pub work: Option<u32>,
    /// Short break minutes
    #[arg(long)]
    pub short_break: Option<u32>,
    /// Long break minutes
    #[arg(long)]
    pub long_break: Option<u32>,
    /// Work sessions before a long break
    #[arg(long)]
    pub rounds: Option<u32>,
}

impl DurationOverrides {
    pub fn is_empty(&self) -> bool {
        self.work.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.rounds.is_none()
    }

    /// Layer the overrides over the saved schedule and validate the result.
    pub fn resolve(&self, config: &Config) -> Result<TimerConfig, ConfigError> {
        let mut schedule = config.schedule.clone();
        if let Some(v) = self.work {
            schedule.focus_duration = v;
        }
        if let Some(v) = self.short_break {
            schedule.short_break = v;
        }
        if let Some(v) = self.long_break {
            schedule.long_break = v;
        }
        if let Some(v) = self.rounds {
            schedule.pomodoros_before_long_break = v;
        }
        schedule.timer_config()
    }
}
