//! Tick sources.
//!
//! The engine never schedules itself. A [`Ticker`] is armed while the timer
//! runs and disarmed while it is paused; the owner of the engine waits on it
//! and calls `tick()` for every period that elapses.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Nominal tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic-callback capability injected into the controller.
pub trait Ticker {
    /// Begin delivering ticks. Arming an armed ticker keeps the current phase.
    fn arm(&mut self);

    /// Stop delivering ticks.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Ticker backed by a tokio interval.
///
/// Late ticks are delayed rather than bursted; the countdown does not try to
/// catch up with wall-clock time.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn every_second() -> Self {
        Self::new(TICK_PERIOD)
    }

    /// Resolves at the next period while armed. Never resolves while
    /// disarmed, which makes it safe to use as a `tokio::select!` branch.
    pub async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self) {
        if self.interval.is_some() {
            return;
        }
        // First tick one full period after arming, not immediately.
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

/// Ticker with no clock. The caller invokes `tick()` itself.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    armed: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self) {
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_ticker_tracks_arm_state() {
        let mut t = ManualTicker::new();
        assert!(!t.is_armed());
        t.arm();
        t.arm();
        assert!(t.is_armed());
        t.disarm();
        assert!(!t.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_fires_after_one_period() {
        let mut t = IntervalTicker::every_second();
        t.arm();
        let started = Instant::now();
        t.next_tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);
        t.next_tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_ticker_never_fires() {
        let mut t = IntervalTicker::every_second();
        let fired = tokio::time::timeout(Duration::from_secs(10), t.next_tick()).await;
        assert!(fired.is_err());

        t.arm();
        t.disarm();
        let fired = tokio::time::timeout(Duration::from_secs(10), t.next_tick()).await;
        assert!(fired.is_err());
    }
}
