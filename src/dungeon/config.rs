// src/dungeon/config.rs

use super::error::{GeneratorError, Result};
use super::ROOM_PADDING_CELLS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MIN_ROOM_SIZE: u32 = 3;
pub const DEFAULT_MAX_ROOM_SIZE: u32 = 8;
pub const DEFAULT_GRID_SIZE: u32 = 50;
pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;
pub const DEFAULT_WALL_COLOR: &str = "#ff0000";
pub const DEFAULT_WALL_SIZE: f64 = 8.0;

/// Generator settings. Room sizes are in grid cells, everything else in pixels.
///
/// Only `numRooms` is required when reading JSON:
///
/// ```
/// use dungeon_forge::dungeon::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(r#"{"numRooms": 5, "seed": 12345}"#).unwrap();
/// assert_eq!(config.grid_size, 50);
/// assert_eq!(config.seed, Some(12345));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub num_rooms: usize,
    #[serde(default = "default_min_room_size")]
    pub min_room_size: u32,
    #[serde(default = "default_max_room_size")]
    pub max_room_size: u32,
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_wall_color")]
    pub wall_color: String,
    #[serde(default = "default_wall_size")]
    pub wall_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_min_room_size() -> u32 {
    DEFAULT_MIN_ROOM_SIZE
}
fn default_max_room_size() -> u32 {
    DEFAULT_MAX_ROOM_SIZE
}
fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}
fn default_canvas_width() -> u32 {
    DEFAULT_CANVAS_WIDTH
}
fn default_canvas_height() -> u32 {
    DEFAULT_CANVAS_HEIGHT
}
fn default_wall_color() -> String {
    DEFAULT_WALL_COLOR.to_string()
}
fn default_wall_size() -> f64 {
    DEFAULT_WALL_SIZE
}

impl GeneratorConfig {
    pub fn new(num_rooms: usize) -> Self {
        GeneratorConfig {
            num_rooms,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            wall_color: DEFAULT_WALL_COLOR.to_string(),
            wall_size: DEFAULT_WALL_SIZE,
            seed: None,
        }
    }

    pub fn with_room_size(mut self, min: u32, max: u32) -> Self {
        self.min_room_size = min;
        self.max_room_size = max;
        self
    }

    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_wall_style(mut self, color: &str, size: f64) -> Self {
        self.wall_color = color.to_string();
        self.wall_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects configurations the placement arithmetic cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.num_rooms == 0 {
            return Err(GeneratorError::NoRooms);
        }
        if self.grid_size == 0 {
            return Err(GeneratorError::InvalidGridSize);
        }
        if self.min_room_size == 0 {
            return Err(GeneratorError::InvalidRoomSize);
        }
        if self.min_room_size > self.max_room_size {
            return Err(GeneratorError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(GeneratorError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        let limit = i32::MAX as u64;
        let largest_room = self.max_room_size as u64 * self.grid_size as u64;
        // Overlap tests compute `room edge + padding`; rooms end inside the canvas.
        let padding = ROOM_PADDING_CELLS as u64 * self.grid_size as u64;
        for (field, value) in [
            ("gridSize", self.grid_size as u64),
            ("canvasWidth", self.canvas_width as u64),
            ("canvasHeight", self.canvas_height as u64),
            ("maxRoomSize", largest_room),
            ("canvasWidth + padding", self.canvas_width as u64 + padding),
            ("canvasHeight + padding", self.canvas_height as u64 + padding),
        ] {
            if value > limit {
                return Err(GeneratorError::DimensionTooLarge { field, value });
            }
        }
        if !self.wall_size.is_finite() || self.wall_size <= 0.0 {
            return Err(GeneratorError::InvalidWallSize(self.wall_size));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
