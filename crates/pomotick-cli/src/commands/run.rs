//! Interactive timer.
//!
//! One task owns the controller and selects between the ticker and the key
//! channel, so `tick()` and the user commands never run concurrently. Keys
//! are read on a dedicated blocking thread that only forwards commands.

use std::io::stdout;
use std::path::Path;
use std::thread;

use clap::Args;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use pomotick_core::{Config, IntervalTicker, TimerConfig, TimerController};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::DurationOverrides;
use crate::render::{Bell, StatusLine, TitleBar};

#[derive(Args)]
pub struct RunArgs {
    /// Start counting immediately instead of waiting for Space
    #[arg(long)]
    pub autostart: bool,
    /// Do not ring the bell on mode switches
    #[arg(long)]
    pub no_bell: bool,
    #[command(flatten)]
    pub overrides: DurationOverrides,
}

/// User actions, translated from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Toggle,
    Reset,
    /// Change the work duration by this many minutes.
    AdjustWork(i32),
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputCommand::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputCommand::Toggle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(InputCommand::AdjustWork(1)),
        KeyCode::Char('-') => Some(InputCommand::AdjustWork(-1)),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Work duration after applying `delta`, never below one minute.
pub fn adjusted_work(current: &TimerConfig, delta: i32) -> u32 {
    let next = i64::from(current.work_min()) + i64::from(delta);
    next.clamp(1, i64::from(u32::MAX)) as u32
}

/// Restores the terminal when the run ends, however it ends.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        let _ = disable_raw_mode();
        println!();
    }
}

fn spawn_key_reader(tx: UnboundedSender<InputCommand>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(TermEvent::Key(key)) => {
                if let Some(cmd) = command_for(key) {
                    if tx.send(cmd).is_err() || cmd == InputCommand::Quit {
                        break;
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("key reader stopped: {e}");
                let _ = tx.send(InputCommand::Quit);
                break;
            }
        }
    });
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    let timer = args.overrides.resolve(&config)?;
    // Overridden runs never write back to the settings file.
    let persist_to = if args.overrides.is_empty() {
        Some(Config::path()?)
    } else {
        None
    };

    let mut ctl = TimerController::new(timer, IntervalTicker::every_second());
    ctl.subscribe(StatusLine::new(stdout(), config.ui.show_progress));
    if config.ui.show_title {
        ctl.subscribe(TitleBar::new(stdout()));
    }
    if config.notifications.enabled && !args.no_bell {
        ctl.subscribe(Bell::new(stdout(), config.notifications.desktop));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let _guard = RawModeGuard::enter()?;
    let (tx, rx) = unbounded_channel();
    spawn_key_reader(tx);

    runtime.block_on(async {
        ctl.publish_snapshot();
        if args.autostart {
            ctl.start();
        }
        event_loop(&mut ctl, rx, &mut config, persist_to.as_deref()).await
    })
}

/// Save the new work duration. A failed save is logged; the timer keeps the
/// new duration either way.
fn persist_work(config: &mut Config, path: &Path, work: u32) {
    let saved = config
        .apply("schedule.focus_duration", &work.to_string())
        .and_then(|_| config.save_to(path));
    if let Err(e) = saved {
        warn!("could not save work duration: {e}");
    }
}

async fn event_loop(
    ctl: &mut TimerController<IntervalTicker>,
    mut rx: UnboundedReceiver<InputCommand>,
    config: &mut Config,
    persist_to: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("interactive timer running");
    loop {
        tokio::select! {
            _ = ctl.ticker_mut().next_tick() => {
                ctl.tick();
            }
            cmd = rx.recv() => {
                let Some(cmd) = cmd else { break };
                debug!(?cmd, "input");
                match cmd {
                    InputCommand::Toggle => {
                        ctl.toggle();
                    }
                    InputCommand::Reset => {
                        ctl.reset();
                    }
                    InputCommand::AdjustWork(delta) => {
                        let work = adjusted_work(ctl.engine().config(), delta);
                        let current = *ctl.engine().config();
                        let next = TimerConfig::new(
                            work,
                            current.short_break_min(),
                            current.long_break_min(),
                            current.rounds_per_long_break(),
                        )?;
                        ctl.update_config(next);
                        if let Some(path) = persist_to {
                            persist_work(config, path, work);
                        }
                    }
                    InputCommand::Quit => break,
                }
            }
        }
    }
    info!("interactive timer stopped");
    Ok(())
}
