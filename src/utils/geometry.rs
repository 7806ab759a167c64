// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// A pixel coordinate on the battlemap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D::new(self.x + dx, self.y + dy)
    }
}

/// Flattens a polyline into the `[x1, y1, x2, y2, ...]` layout used by drawings.
pub fn flatten_points(points: &[Point2D]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
