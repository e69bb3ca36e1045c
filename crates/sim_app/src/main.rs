//! # sim_app: simulation host
//!
//! Builds a [`World`] from a scenario, wires up an input source and a
//! presentation sink, and runs the frame loop.
//!
//! ## Startup sequence
//!
//! 1. Parse the command line and load the optional JSON config.
//! 2. Spawn the scenario (the built-in demo unless `--scenario` is given).
//! 3. Drive the first two `Input` holders with seeded random intents.
//! 4. Run frames until `--frames` is reached or a system fails.

mod demo_input;
mod scenario;
mod sink;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sim_component::World;
use sim_system::{Config, FrameLoop, InputSource, NullInput, PresentationSink, SystemClock};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use demo_input::RandomInput;
use scenario::Scenario;
use sink::{ConsoleSink, JsonSink};

#[derive(Parser)]
#[command(name = "sim_app", about = "Frame-stepped ECS simulation")]
struct Args {
    /// JSON config file (physics, combat and frame settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON scenario file; the built-in demo is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Stop after this many frames (0 runs forever)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Target frames per second
    #[arg(long)]
    frame_rate: Option<f64>,

    /// Seed for the random demo input
    #[arg(long)]
    seed: Option<u64>,

    /// Print display records as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env())?)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(frames) = args.frames {
        config.frame.max_frames = frames;
    }
    if let Some(rate) = args.frame_rate {
        config.frame.frame_rate = rate;
    }
    config.validate()?;

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::demo(),
    };
    let mut world = World::new();
    scenario.spawn(&mut world)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let players = world.store().inputs.entities();
    info!(seed, controllable = players.len(), "simulation starting");

    match (players.as_slice(), args.json) {
        ([p1, p2, ..], false) => drive(
            world,
            config,
            RandomInput::new(seed, *p1, *p2),
            ConsoleSink::stdout(),
        ),
        ([p1, p2, ..], true) => drive(
            world,
            config,
            RandomInput::new(seed, *p1, *p2),
            JsonSink::stdout(),
        ),
        (_, json) => {
            warn!("fewer than two entities with Input; running without input");
            if json {
                drive(world, config, NullInput, JsonSink::stdout())
            } else {
                drive(world, config, NullInput, ConsoleSink::stdout())
            }
        }
    }
}

/// Startup and hit logs are on unless `RUST_LOG` says otherwise.
fn log_filter(base: EnvFilter) -> Result<EnvFilter> {
    Ok(base
        .add_directive("sim_app=info".parse()?)
        .add_directive("sim_system=info".parse()?))
}

fn drive<I: InputSource, S: PresentationSink>(
    world: World,
    config: Config,
    input: I,
    sink: S,
) -> Result<()> {
    let Config { sim, frame } = config;
    let mut frames = FrameLoop::new(world, &sim, frame, SystemClock, input, sink);
    frames.run()?;
    info!(
        frames = frames.frame_id(),
        entities = frames.world().entity_count(),
        "simulation finished"
    );
    Ok(())
}
