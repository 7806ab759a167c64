//! # Dungeon Forge Entry Point
//!
//! Generates battlemap dungeons from the command line and writes them as JSON
//! map snapshots, ready to be merged into a virtual tabletop map. A single run
//! can produce several maps at once; these are generated in parallel, one
//! seed per map.
//!
//! ## License
//! Licensed under the MIT License.

use clap::Parser;
use dungeon_forge::document::{Battlemap, MapSnapshot};
use dungeon_forge::dungeon::{
    batch, campaign_seeds, DungeonGenerator, GeneratedDungeon, GeneratorConfig,
};
use dungeon_forge::utils::{IdSource, SequentialIds, UuidIds};
use log::info;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Procedural dungeon generator for battlemaps
#[derive(Parser, Debug)]
#[command(name = "dungeon_forge")]
#[command(author, version, about = "Generate seeded dungeon battlemaps", long_about = None)]
struct Args {
    /// JSON configuration file (explicit flags override its values)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of rooms to place
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Smallest room side, in grid cells
    #[arg(long = "min-room-size")]
    min_room_size: Option<u32>,

    /// Largest room side, in grid cells
    #[arg(long = "max-room-size")]
    max_room_size: Option<u32>,

    /// Grid cell size in pixels
    #[arg(short = 'g', long = "grid-size")]
    grid_size: Option<u32>,

    /// Canvas width in pixels
    #[arg(long = "width")]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long = "height")]
    height: Option<u32>,

    /// Wall stroke color
    #[arg(long = "wall-color")]
    wall_color: Option<String>,

    /// Wall stroke width
    #[arg(long = "wall-size")]
    wall_size: Option<f64>,

    /// Seed for reproducible output
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of maps to generate (consecutive seeds)
    #[arg(short = 'n', long = "maps", default_value_t = 1)]
    maps: usize,

    /// Use numbered IDs instead of UUIDs
    #[arg(long = "sequential-ids")]
    sequential_ids: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Builds the generator config: file first, then flags on top.
    fn to_config(&self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::new(self.rooms.ok_or("either --rooms or --config is required")?),
        };
        if let Some(rooms) = self.rooms {
            config.num_rooms = rooms;
        }
        if let Some(min) = self.min_room_size {
            config.min_room_size = min;
        }
        if let Some(max) = self.max_room_size {
            config.max_room_size = max;
        }
        if let Some(grid) = self.grid_size {
            config.grid_size = grid;
        }
        if let Some(width) = self.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.height {
            config.canvas_height = height;
        }
        if let Some(color) = &self.wall_color {
            config.wall_color = color.clone();
        }
        if let Some(size) = self.wall_size {
            config.wall_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }

    fn id_source(&self) -> Box<dyn IdSource> {
        if self.sequential_ids {
            Box::new(SequentialIds::new())
        } else {
            Box::new(UuidIds)
        }
    }
}

fn generate_maps(args: &Args, config: &GeneratorConfig) -> Result<Vec<GeneratedDungeon>, Box<dyn Error>> {
    if args.maps <= 1 {
        let mut generator = DungeonGenerator::with_id_source(config.clone(), args.id_source())?;
        return Ok(vec![generator.generate()]);
    }
    let base = config.seed.unwrap_or_else(rand::random);
    let seeds = campaign_seeds(base, args.maps);
    Ok(batch::generate_batch_with_ids(config, &seeds, || args.id_source())?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Initialize logging. RUST_LOG still wins when set.
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
    info!("Dungeon Forge starting...");

    let config = args.to_config()?;
    let dungeons = generate_maps(&args, &config)?;

    let mut snapshots: Vec<MapSnapshot> = Vec::with_capacity(dungeons.len());
    for (index, dungeon) in dungeons.iter().enumerate() {
        let mut map = Battlemap::new(
            &format!("Dungeon {} (seed {})", index + 1, dungeon.stats.seed),
            config.grid_size,
        );
        map.apply_dungeon(dungeon)?;
        snapshots.push(map.snapshot());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshots)?
    } else {
        serde_json::to_string(&snapshots)?
    };
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("wrote {} map(s) to {}", snapshots.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    info!("Dungeon Forge exiting.");
    Ok(())
}
