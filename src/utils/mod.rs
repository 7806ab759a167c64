// src/utils/mod.rs
pub mod geometry;
pub mod ids;

pub use geometry::Point2D;
pub use ids::{IdSource, SequentialIds, UuidIds};
