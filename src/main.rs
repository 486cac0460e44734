//! Replay driver: feeds a recorded gesture script into a fresh engine and
//! prints the resulting render model as JSON.
//!
//! ```text
//! pointboard <points.json> <events.json> [--settings <path>] [--profile]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pointboard::SelectionEngine;
use pointboard::data::load_raw_points;
use pointboard::input::{MouseDown, MouseMove, MouseUp, PointerEvent};
use pointboard::perf::{OperationStats, ScopedTimer, set_profiling_enabled};
use pointboard::settings::Settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// One line of a gesture script: a pointer event or a button command.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Step {
    Down(MouseDown),
    Move(MouseMove),
    Up(MouseUp),
    Delete,
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "pointboard")]
#[command(about = "Replay a gesture script against a point set and print the render model")]
struct Args {
    /// JSON list of points
    points: PathBuf,
    /// JSON gesture script
    events: PathBuf,
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Log event timing statistics
    #[arg(long)]
    profile: bool,
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_steps(path: &Path) -> Result<Vec<Step>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading gesture script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing gesture script {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading settings")?;
    init_logging(&settings);
    set_profiling_enabled(args.profile);

    let raw = load_raw_points(&args.points)
        .with_context(|| format!("loading points from {}", args.points.display()))?;
    let mut engine = SelectionEngine::with_settings(&raw, &settings).context("building point set")?;
    let steps = load_steps(&args.events)?;
    info!(points = raw.len(), steps = steps.len(), "replaying gesture script");

    let mut stats = OperationStats::default();
    for (i, step) in steps.into_iter().enumerate() {
        let _timer = ScopedTimer::with_default_threshold("replay_step");
        let start = Instant::now();
        let event = match step {
            Step::Down(down) => PointerEvent::Down(down),
            Step::Move(moved) => PointerEvent::Move(moved),
            Step::Up(up) => PointerEvent::Up(up),
            Step::Delete => {
                let remaining = engine.delete_selected().len();
                debug!(step = i, remaining, "delete");
                continue;
            }
            Step::Reset => {
                engine.reset_selection();
                debug!(step = i, "reset");
                continue;
            }
        };
        match engine.handle_event(&event) {
            Ok(response) => debug!(step = i, ?response, "event handled"),
            Err(e) => warn!(step = i, error = %e, "event rejected"),
        }
        stats.record(start.elapsed().as_secs_f64() * 1000.0);
    }

    if args.profile {
        info!(
            events = stats.count(),
            avg_ms = format!("{:.3}", stats.average()),
            max_ms = format!("{:.3}", stats.max()),
            "event timing"
        );
    }

    let model = engine.render_model();
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}
