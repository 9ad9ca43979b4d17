use clap::Args;
use pomotick_core::{Config, Event, ManualTicker, TimerController};

use super::DurationOverrides;

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of one-second ticks to deliver
    #[arg(long, default_value = "60")]
    pub ticks: u64,
    /// Leave the timer paused, so every tick is ignored
    #[arg(long)]
    pub paused: bool,
    /// Only print mode changes
    #[arg(long)]
    pub transitions_only: bool,
    #[command(flatten)]
    pub overrides: DurationOverrides,
}

fn print_event(event: &Event) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let timer = args.overrides.resolve(&config)?;
    let mut ctl = TimerController::new(timer, ManualTicker::new());

    if !args.paused {
        if let Some(ev) = ctl.start() {
            if !args.transitions_only {
                print_event(&ev)?;
            }
        }
    }

    for _ in 0..args.ticks {
        match ctl.tick() {
            Some(ev) if ev.is_mode_change() || !args.transitions_only => print_event(&ev)?,
            _ => {}
        }
    }

    print_event(&ctl.engine().snapshot())?;
    Ok(())
}
