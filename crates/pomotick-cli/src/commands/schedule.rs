use clap::Args;
use pomotick_core::{Config, Mode};
use serde::Serialize;

use super::DurationOverrides;

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub overrides: DurationOverrides,
}

#[derive(Serialize)]
struct Block {
    mode: Mode,
    label: &'static str,
    minutes: u32,
}

#[derive(Serialize)]
struct CyclePlan {
    blocks: Vec<Block>,
    total_min: u64,
}

pub fn run(args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let timer = args.overrides.resolve(&config)?;

    let plan = CyclePlan {
        blocks: timer
            .cycle()
            .into_iter()
            .map(|mode| Block {
                mode,
                label: mode.label(),
                minutes: timer.minutes(mode),
            })
            .collect(),
        total_min: timer.cycle_duration_min(),
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
