// src/dungeon/generator.rs

use super::config::GeneratorConfig;
use super::corridor::{Corridor, Doorway};
use super::error::Result;
use super::rng::DungeonRng;
use super::room::Room;
use super::walls::build_room_walls;
use super::{MAX_PLACEMENT_ATTEMPTS, ROOM_PADDING_CELLS};
use crate::map::{Door, Drawing};
use crate::utils::{IdSource, Point2D, UuidIds};
use log::{debug, info, trace, warn};
use serde::Serialize;
use std::time::Instant;

/// Places rooms, joins them with corridors and turns the result into wall
/// drawings and doors.
pub struct DungeonGenerator {
    config: GeneratorConfig,
    ids: Box<dyn IdSource>,
    rooms: Vec<Room>,
    stats: Option<GenerationStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub seed: u64,
    pub grid_size: u32,
    pub requested_rooms: usize,
    pub room_count: usize,
    pub skipped_rooms: usize,
    pub placement_attempts: usize,
    pub corridor_count: usize,
    pub door_count: usize,
    pub drawing_count: usize,
    /// Total length of all wall drawings, in pixels.
    pub wall_length: f64,
    pub generation_time_ms: f64,
}

/// Output of one generation run. Only `drawings` and `doors` go on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDungeon {
    pub drawings: Vec<Drawing>,
    pub doors: Vec<Door>,
    #[serde(skip)]
    pub stats: GenerationStats,
}

impl DungeonGenerator {
    /// Creates a generator handing out random UUIDs.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_id_source(config, Box::new(UuidIds))
    }

    pub fn with_id_source(config: GeneratorConfig, ids: Box<dyn IdSource>) -> Result<Self> {
        config.validate()?;
        Ok(DungeonGenerator {
            config,
            ids,
            rooms: Vec::new(),
            stats: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Rooms accepted by the last run, sorted by horizontal center.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn stats(&self) -> Option<&GenerationStats> {
        self.stats.as_ref()
    }

    /// Runs the generator with a random source built from the configured seed
    /// (or a fresh one when unseeded). Seeded runs are identical every call.
    pub fn generate(&mut self) -> GeneratedDungeon {
        let mut rng = DungeonRng::from_seed_option(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Runs the generator with a caller-supplied random source.
    pub fn generate_with(&mut self, rng: &mut DungeonRng) -> GeneratedDungeon {
        let started = Instant::now();
        let grid = self.config.grid_size as i32;

        let (mut rooms, placement_attempts, skipped_rooms) = self.place_rooms(rng);
        // Left-to-right order keeps the corridor chain roughly monotonic.
        rooms.sort_by(|a, b| a.center().x.total_cmp(&b.center().x));
        self.rooms = rooms;

        let mut drawings = Vec::new();
        let mut doorways: Vec<Vec<Doorway>> = vec![Vec::new(); self.rooms.len()];
        let half_width = grid as f64 / 2.0;

        let corridor_count = self.rooms.len().saturating_sub(1);
        for index in 0..corridor_count {
            let corridor = Corridor::plan(&self.rooms, index, index + 1, grid, rng);
            doorways[corridor.from.room].push(corridor.from);
            doorways[corridor.to.room].push(corridor.to);
            for segment in corridor.walls(half_width) {
                drawings.push(wall(self.ids.as_mut(), &self.config, &segment));
            }
        }

        let mut doors = Vec::with_capacity(corridor_count * 2);
        for (index, room) in self.rooms.iter().enumerate() {
            let walls = build_room_walls(room, &doorways[index], grid);
            for polyline in &walls.polylines {
                drawings.push(wall(self.ids.as_mut(), &self.config, polyline));
            }
            for doorway in walls.doorways {
                doors.push(Door::new(
                    self.ids.next_id("door"),
                    doorway.point.x,
                    doorway.point.y,
                    doorway.edge.door_orientation(),
                    self.config.grid_size as f64,
                    self.config.wall_size,
                ));
            }
        }

        let stats = GenerationStats {
            seed: rng.seed(),
            grid_size: self.config.grid_size,
            requested_rooms: self.config.num_rooms,
            room_count: self.rooms.len(),
            skipped_rooms,
            placement_attempts,
            corridor_count,
            door_count: doors.len(),
            drawing_count: drawings.len(),
            wall_length: drawings.iter().map(Drawing::length).sum(),
            generation_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            "generated dungeon (seed {}): {}/{} rooms, {} corridors, {} doors, {} walls ({:.0}px) in {:.2}ms",
            stats.seed,
            stats.room_count,
            stats.requested_rooms,
            stats.corridor_count,
            stats.door_count,
            stats.drawing_count,
            stats.wall_length,
            stats.generation_time_ms
        );
        self.stats = Some(stats.clone());

        GeneratedDungeon {
            drawings,
            doors,
            stats,
        }
    }

    /// Tries up to `MAX_PLACEMENT_ATTEMPTS` candidates per requested room.
    /// Returns the accepted rooms, the number of attempts and the number of
    /// rooms given up on.
    fn place_rooms(&self, rng: &mut DungeonRng) -> (Vec<Room>, usize, usize) {
        let padding = ROOM_PADDING_CELLS * self.config.grid_size as i32;
        let mut rooms: Vec<Room> = Vec::with_capacity(self.config.num_rooms);
        let mut attempts = 0;
        let mut skipped = 0;

        for index in 0..self.config.num_rooms {
            let mut placed = false;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                attempts += 1;
                let Some(candidate) = self.random_room(rng) else {
                    continue;
                };
                if rooms.iter().any(|room| candidate.overlaps(room, padding)) {
                    trace!("room {} candidate {:?} overlaps, retrying", index, candidate);
                    continue;
                }
                debug!("placed room {} at {:?}", index, candidate);
                rooms.push(candidate);
                placed = true;
                break;
            }
            if !placed {
                debug!("room {} did not fit after {} attempts", index, MAX_PLACEMENT_ATTEMPTS);
                skipped += 1;
            }
        }

        if skipped > 0 {
            warn!(
                "placed {} of {} rooms; {} did not fit on a {}x{} canvas",
                rooms.len(),
                self.config.num_rooms,
                skipped,
                self.config.canvas_width,
                self.config.canvas_height
            );
        }
        (rooms, attempts, skipped)
    }

    /// A random grid-aligned room inside the canvas, or `None` if the drawn
    /// size does not fit at all.
    fn random_room(&self, rng: &mut DungeonRng) -> Option<Room> {
        let grid = self.config.grid_size;
        let width = rng.range_inclusive(self.config.min_room_size, self.config.max_room_size) * grid;
        let height = rng.range_inclusive(self.config.min_room_size, self.config.max_room_size) * grid;
        let max_x_cell = self.config.canvas_width.checked_sub(width)? / grid;
        let max_y_cell = self.config.canvas_height.checked_sub(height)? / grid;
        let x = rng.range_inclusive(0, max_x_cell) * grid;
        let y = rng.range_inclusive(0, max_y_cell) * grid;
        Some(Room::new(x as i32, y as i32, width as i32, height as i32))
    }
}

fn wall(ids: &mut dyn IdSource, config: &GeneratorConfig, points: &[Point2D]) -> Drawing {
    Drawing::wall(ids.next_id("wall"), points, &config.wall_color, config.wall_size)
}

/// One-shot generation from a configuration.
pub fn generate(config: GeneratorConfig) -> Result<GeneratedDungeon> {
    Ok(DungeonGenerator::new(config)?.generate())
}
