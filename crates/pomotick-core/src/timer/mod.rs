mod controller;
mod engine;
mod schedule;
mod ticker;

pub use controller::{EventListener, TimerController};
pub use engine::TimerEngine;
pub use schedule::{round_in_cycle, Mode, TimerConfig};
pub use ticker::{IntervalTicker, ManualTicker, Ticker, TICK_PERIOD};
