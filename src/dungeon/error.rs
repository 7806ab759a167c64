// src/dungeon/error.rs
use thiserror::Error;

/// Errors raised while configuring the generator or reading/writing its data.
/// Generation itself never fails once a configuration has been validated.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("room count must be at least 1")]
    NoRooms,

    #[error("grid size must be positive")]
    InvalidGridSize,

    #[error("minimum room size must be at least one grid cell")]
    InvalidRoomSize,

    #[error("minimum room size {min} exceeds maximum room size {max}")]
    RoomSizeRange { min: u32, max: u32 },

    #[error("canvas dimensions must be positive (got {width}x{height})")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("{field} value {value} does not fit in pixel space")]
    DimensionTooLarge { field: &'static str, value: u64 },

    #[error("wall size must be a positive finite number (got {0})")]
    InvalidWallSize(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
