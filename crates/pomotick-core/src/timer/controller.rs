//! Binds one [`TimerEngine`] to one [`Ticker`] and a set of listeners.
//!
//! The ticker is armed exactly while the engine is running, so at most one
//! periodic source drives `tick()` at any time.

use tracing::{debug, info, trace};

use super::engine::TimerEngine;
use super::schedule::TimerConfig;
use super::ticker::Ticker;
use crate::events::Event;

/// Subscriber for timer events (display, bell, title bar).
///
/// Listeners observe; they get no handle back into the timer.
pub trait EventListener {
    fn on_event(&mut self, event: &Event);
}

impl<F> EventListener for F
where
    F: FnMut(&Event),
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

pub struct TimerController<T: Ticker> {
    engine: TimerEngine,
    ticker: T,
    listeners: Vec<Box<dyn EventListener>>,
}

impl<T: Ticker> TimerController<T> {
    pub fn new(config: TimerConfig, ticker: T) -> Self {
        Self {
            engine: TimerEngine::new(config),
            ticker,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Events are delivered in registration order.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start();
        self.sync_ticker();
        if let Some(ev) = &event {
            info!(mode = %self.engine.mode(), remaining = self.engine.remaining_secs(), "timer started");
            self.emit(ev);
        }
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.sync_ticker();
        if let Some(ev) = &event {
            info!(mode = %self.engine.mode(), remaining = self.engine.remaining_secs(), "timer paused");
            self.emit(ev);
        }
        event
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.engine.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Event {
        let event = self.engine.reset();
        self.sync_ticker();
        info!("timer reset");
        self.emit(&event);
        event
    }

    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick()?;
        match &event {
            Event::ModeChanged {
                from,
                to,
                completed_work_sessions,
                ..
            } => {
                info!(%from, %to, completed = completed_work_sessions, "mode changed");
            }
            _ => trace!(remaining = self.engine.remaining_secs(), "tick"),
        }
        self.emit(&event);
        Some(event)
    }

    pub fn update_config(&mut self, config: TimerConfig) -> Event {
        let event = self.engine.update_config(config);
        self.sync_ticker();
        info!(
            work = config.work_min(),
            short_break = config.short_break_min(),
            long_break = config.long_break_min(),
            rounds = config.rounds_per_long_break(),
            "timer config updated"
        );
        self.emit(&event);
        event
    }

    /// Deliver a snapshot of the current state to every listener.
    pub fn publish_snapshot(&mut self) -> Event {
        let event = self.engine.snapshot();
        self.emit(&event);
        event
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn sync_ticker(&mut self) {
        match (self.engine.is_running(), self.ticker.is_armed()) {
            (true, false) => {
                debug!("arming ticker");
                self.ticker.arm();
            }
            (false, true) => {
                debug!("disarming ticker");
                self.ticker.disarm();
            }
            _ => {}
        }
    }

    fn emit(&mut self, event: &Event) {
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}
