use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_life::{Algorithm, Grid, LifeConfig, Simulation, presets};

/// Headless Game of Life on a bounded square board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid edge length (overrides config)
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    /// RNG seed for the initial grid (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern in the middle of an empty grid
    #[arg(short, long)]
    pattern: Option<String>,

    /// Use the rayon-parallel evolution
    #[arg(long)]
    parallel: bool,

    /// Pace generations with the configured tick interval
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LifeConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LifeConfig::default(),
    };
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.parallel {
        config.algorithm = Algorithm::Parallel;
    }

    let mut sim = Simulation::new(&config)?;

    if let Some(name) = &args.pattern {
        let Some(pattern) = presets::by_name(name) else {
            let known: Vec<_> = presets::all_patterns().iter().map(|p| p.summary()).collect();
            bail!("unknown pattern '{name}', expected one of:\n  {}", known.join("\n  "));
        };
        let mut grid = Grid::new(config.grid_size)?;
        pattern.place_centered(&mut grid);
        sim = sim.with_grid(grid);
    }

    info!(
        generations = args.generations,
        algorithm = config.algorithm.name(),
        "starting"
    );

    if args.realtime {
        sim.toggle_running();
        let mut last = Instant::now();
        while sim.generation() < args.generations {
            std::thread::sleep(sim.tick_interval());
            let now = Instant::now();
            sim.tick(now - last);
            last = now;
        }
        sim.toggle_running();
    } else {
        for _ in 0..args.generations {
            sim.step();
        }
    }

    info!(
        generation = sim.generation(),
        population = sim.grid().population(),
        "finished"
    );
    print!("{}", sim.grid());

    Ok(())
}
