// src/dungeon/mod.rs
pub mod batch;
pub mod config;
pub mod corridor;
pub mod error;
pub mod generator;
pub mod rng;
pub mod room;
pub mod walls;

pub use batch::{campaign_seeds, generate_batch};
pub use config::GeneratorConfig;
pub use corridor::{Corridor, Doorway};
pub use error::GeneratorError;
pub use generator::{generate, DungeonGenerator, GeneratedDungeon, GenerationStats};
pub use rng::DungeonRng;
pub use room::{Edge, Room};

/// Candidate rooms tried before a room is given up on.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;
/// Minimum gap between rooms, in grid cells.
pub const ROOM_PADDING_CELLS: i32 = 2;
/// Pixels a corridor starts outside its room's wall.
pub const CONNECTION_NUDGE: f64 = 1.0;
/// Wall pieces this short or shorter are not emitted.
pub const MIN_WALL_LENGTH: f64 = 1.0;
