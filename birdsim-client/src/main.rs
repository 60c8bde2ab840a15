use anyhow::{Context, Result};
use birdsim_client::{load_settings, run};
use birdsim_shared::SimulationSettings;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless bird and fish scene simulation", long_about = None)]
struct Args {
    /// JSON settings file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of creatures to summon
    #[arg(short, long)]
    total: Option<i64>,

    /// Share of fish among the creatures, 0-100
    #[arg(short, long)]
    fish_percent: Option<f32>,

    /// Distance each bird climbs per frame
    #[arg(short, long)]
    base_speed: Option<f32>,

    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value = "600")]
    frames: u64,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Colour conversion: 'normalized' or 'unscaled'
    #[arg(long)]
    colour_scale: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Do not print the final snapshot
    #[arg(long)]
    no_snapshot: bool,
}

fn apply_overrides(settings: &mut SimulationSettings, args: &Args) {
    if let Some(total) = args.total {
        settings.spawn.creature_amount = total;
    }
    if let Some(percent) = args.fish_percent {
        settings.spawn.fish_percent = percent;
    }
    if let Some(speed) = args.base_speed {
        settings
            .movement
            .get_or_insert_with(Default::default)
            .base_speed = speed;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(scale) = &args.colour_scale {
        settings.colour_scale = scale.clone();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut settings = match &args.config {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            load_settings(path)?
        }
        None => SimulationSettings::default(),
    };
    apply_overrides(&mut settings, &args);

    log::info!(
        "Creatures: {}, fish: {}%",
        settings.spawn.creature_amount,
        settings.spawn.fish_percent
    );

    let snapshot = run(&settings, args.frames).context("Simulation error")?;

    if !args.no_snapshot {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
