//! Heart Flap entry point
//!
//! Headless native runner: drives a session with a bot or timed presses and
//! reports the result through a render sink.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::LevelFilter;

use heart_flap::platform::{AutoFlapper, Autopilot, InputSource};
use heart_flap::renderer::{AsciiSink, JsonLinesSink, LogSink, RenderSink};
use heart_flap::sim::SeededRandom;
use heart_flap::{Game, Tuning};

/// Frame rate the headless runner pretends to render at
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Log,
    Json,
    Ascii,
}

#[derive(Debug, Parser)]
#[command(name = "heart-flap", about = "Run a headless Heart Flap session")]
struct Cli {
    /// Seed for gap placement
    #[arg(long, default_value_t = 2026)]
    seed: u64,
    /// JSON file overriding default tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Stop after this many seconds even if still alive
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Press at a fixed period (milliseconds) instead of using the autopilot
    #[arg(long, conflicts_with = "autopilot")]
    flap_every: Option<u32>,
    /// Flap whenever the player sinks below the next gap
    #[arg(long)]
    autopilot: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Log)]
    format: Format,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::info!("Heart Flap (headless) starting with seed {}", cli.seed);

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let input: Box<dyn InputSource> = match cli.flap_every {
        Some(ms) if !cli.autopilot => Box::new(AutoFlapper::new(heart_flap::ms_to_secs(ms))),
        _ => Box::new(Autopilot::default()),
    };
    let sink: Box<dyn RenderSink> = match cli.format {
        Format::Log => Box::new(LogSink),
        Format::Json => Box::new(JsonLinesSink::new(std::io::stdout()).events_only(true)),
        Format::Ascii => Box::new(AsciiSink::new(std::io::stdout(), 40, 30, 120)),
    };

    let mut game = Game::new(tuning, SeededRandom::new(cli.seed), input, sink);
    let score = game.run_for(FRAME_DT, cli.seconds);

    if game.is_over() {
        log::info!("Final score: {}", score);
    } else {
        log::info!("Time limit reached, score: {}", score);
    }
    Ok(())
}
