//! Flappy Pipes entry point
//!
//! Runs the simulation headless in idle/demo mode and logs what a
//! presentation layer would react to. Prints the final snapshot as JSON.
//!

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use flappy_pipes::consts::SIM_DT;
use flappy_pipes::sim::{GameEvent, GameState, TickInput, tick};
use flappy_pipes::{FixedStep, Tuning};

#[derive(Parser)]
#[command(name = "flappy-pipes")]
#[command(about = "Run the Flappy Pipes simulation headless in demo mode")]
struct Args {
    /// Run seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many simulation ticks
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// JSON tuning file
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Skip frame pacing and run as fast as possible
    #[arg(long)]
    fast: bool,
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn report(event: GameEvent) {
    match event {
        GameEvent::Jump => log::trace!("flap"),
        GameEvent::Score { score } => log::info!("Score: {}", score),
        GameEvent::Collision { kind } => log::info!("Hit: {:?}", kind),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    };
    let mut state = match tuning.and_then(|t| GameState::with_tuning(t, seed)) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("{} error: {e}", env!("CARGO_PKG_NAME"));
            return ExitCode::FAILURE;
        }
    };
    log::info!("Flappy Pipes (headless demo) starting with seed {}", seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut clock = FixedStep::default();
    let frame = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();

    while state.time_ticks < args.ticks {
        let now = Instant::now();
        let frame_dt = if args.fast {
            SIM_DT
        } else {
            now.duration_since(last).as_secs_f32()
        };
        last = now;

        let steps = clock.advance(frame_dt);
        for _ in 0..steps {
            tick(&mut state, &input);
        }
        log::trace!(
            "frame: {} steps, {:.2} step left over",
            steps,
            clock.alpha()
        );
        for event in state.drain_events() {
            report(event);
        }

        if !args.fast {
            std::thread::sleep(frame);
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize snapshot: {}", e),
    }
    ExitCode::SUCCESS
}
