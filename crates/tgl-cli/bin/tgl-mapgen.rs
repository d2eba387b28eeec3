//! Guardian Legend map generator
//!
//! Generates one randomized room table and optionally dumps the grid, writes
//! the packed bytes, or exports the room lookup table.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use tgl_core::map::ContentTables;
use tgl_core::{GameRng, MapConfig, MapGenerator};

/// Guardian Legend map generator
#[derive(Parser, Debug)]
#[command(name = "tgl-mapgen")]
#[command(author, version, about = "Generate a randomized Guardian Legend map", long_about = None)]
struct Args {
    /// Seed for the generator (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with generation parameters
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of consecutive seeds to try
    #[arg(short = 'a', long = "attempts", default_value_t = 1)]
    attempts: u32,

    /// Print the area, accessibility and visual maps
    #[arg(short = 'd', long = "dump")]
    dump: bool,

    /// Write the packed room table to this file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Write the room lookup table as JSON to this file
    #[arg(short = 'l', long = "lookup")]
    lookup: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<MapConfig> {
    let Some(path) = path else {
        return Ok(MapConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if args.attempts == 0 {
        bail!("--attempts must be at least 1");
    }

    let generator = MapGenerator::new(config, ContentTables::default())
        .context("invalid generator configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("base seed {}", seed);

    let map = generator
        .generate_with_retries(seed, args.attempts)
        .with_context(|| format!("no valid map from seed {} in {} attempts", seed, args.attempts))?;

    println!(
        "seed {}: {} of {} bytes (flip {}, rotation {}, areas {:?})",
        map.seed,
        map.room_bytes(),
        generator.config().max_room_bytes,
        map.layout.flip,
        map.layout.rotation,
        map.layout.permutation
    );

    if args.dump {
        let (_, grid) = generator.build_grid(&mut GameRng::new(map.seed))?;
        println!("{}", grid);
    }
    if let Some(path) = &args.output {
        fs::write(path, &map.bytes).with_context(|| format!("writing {}", path.display()))?;
        info!("room table written to {}", path.display());
    }
    if let Some(path) = &args.lookup {
        let json = serde_json::to_string_pretty(&map.lookup)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("lookup table written to {}", path.display());
    }
    Ok(())
}
