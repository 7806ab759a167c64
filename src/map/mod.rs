// src/map/mod.rs
pub mod door;
pub mod drawing;

pub use door::{Door, DoorOrientation, SwingDirection};
pub use drawing::{Drawing, DrawingTool};
