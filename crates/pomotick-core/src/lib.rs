//! # Pomotick Core Library
//!
//! This library provides the core logic for the Pomotick Pomodoro timer.
//! The terminal binary in `pomotick-cli` is a thin layer of rendering, sound
//! and key bindings over the same types.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a pure state machine; one call to `tick()` is one
//!   elapsed second. It owns no clock and performs no I/O.
//! - **Ticker**: the injected capability that decides when `tick()` runs
//!   (a tokio interval in the binary, a manual ticker in tests)
//! - **Controller**: binds one engine to one ticker and fans events out to
//!   listeners (display, bell, title bar)
//! - **Storage**: TOML-based settings, validated into a [`TimerConfig`]
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TimerController`]: Engine + ticker + listeners
//! - [`Config`]: Persisted settings
//! - [`Event`]: Every state change produces one

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    EventListener, IntervalTicker, ManualTicker, Mode, Ticker, TimerConfig, TimerController,
    TimerEngine,
};
