//! # carousel-sim
//!
//! Replays a JSON interaction script against a headless carousel and prints
//! the state after every event.
//!
//! ```bash
//! carousel-sim tests/fixtures/swipes.json
//! carousel-sim --json --config carousel.json script.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use cafe::CarouselConfig;
use cafe::sim::{self, Frame, Script};

#[derive(Parser, Debug)]
#[command(name = "carousel-sim")]
#[command(about = "Replay carousel interactions headlessly")]
#[command(version)]
struct Args {
    /// Interaction script (JSON)
    script: PathBuf,

    /// Carousel config file overriding the script's `config`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit frames as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_script(args: &Args) -> Result<Script> {
    let raw = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let mut script: Script = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.script.display()))?;

    if let Some(path) = &args.config {
        script.config = CarouselConfig::load_from_path(path);
        debug!(path = %path.display(), "config override loaded");
    }
    Ok(script)
}

fn print_table(frames: &[Frame]) {
    println!(
        "{:<22} {:>8} {:>5} {:<34} {:>6}",
        "event", "t(ms)", "slide", "transform", "timers"
    );
    for frame in frames {
        let slide = if frame.dragging {
            format!("{}*", frame.index)
        } else {
            frame.index.to_string()
        };
        println!(
            "{:<22} {:>8} {:>5} {:<34} {:>6}",
            frame.event, frame.at_ms, slide, frame.transform, frame.live_timers
        );
    }
}

fn run(args: &Args) -> Result<()> {
    let script = load_script(args)?;
    let frames =
        sim::run(&script).with_context(|| format!("replaying {}", args.script.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        print_table(&frames);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("[carousel-sim][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
