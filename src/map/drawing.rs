// src/map/drawing.rs
use serde::{Deserialize, Serialize};

use crate::utils::geometry::{flatten_points, Point2D};

/// The canvas tool a drawing was made with. Serialized as `"wall"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingTool {
    Wall,
}

/// A stroke on the battlemap, stored as a flat `[x1, y1, x2, y2, ...]` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: String,
    pub tool: DrawingTool,
    pub points: Vec<f64>,
    pub color: String,
    pub size: f64,
}

impl Drawing {
    /// Creates a wall drawing through the given points.
    pub fn wall(id: String, points: &[Point2D], color: &str, size: f64) -> Self {
        Drawing {
            id,
            tool: DrawingTool::Wall,
            points: flatten_points(points),
            color: color.to_string(),
            size,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.tool == DrawingTool::Wall
    }

    /// Number of vertices in the stroke.
    pub fn vertex_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn vertex(&self, index: usize) -> Option<Point2D> {
        let x = *self.points.get(index * 2)?;
        let y = *self.points.get(index * 2 + 1)?;
        Some(Point2D::new(x, y))
    }

    pub fn first_point(&self) -> Option<Point2D> {
        self.vertex(0)
    }

    pub fn last_point(&self) -> Option<Point2D> {
        self.vertex_count().checked_sub(1).and_then(|i| self.vertex(i))
    }

    /// Sum of the lengths of all segments in the stroke.
    pub fn length(&self) -> f64 {
        (1..self.vertex_count())
            .filter_map(|i| Some(self.vertex(i - 1)?.distance_to(&self.vertex(i)?)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_wall_drawing_layout() {
        let d = Drawing::wall(
            "wall-1".to_string(),
            &[Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0)],
            "#ff0000",
            8.0,
        );
        assert!(d.is_wall());
        assert_eq!(d.points, vec![0.0, 0.0, 100.0, 0.0]);
        assert_eq!(d.vertex_count(), 2);
        assert_approx_eq!(d.length(), 100.0);
    }

    #[test]
    fn test_closed_rectangle() {
        let pts = [
            Point2D::new(0.0, 0.0),
            Point2D::new(50.0, 0.0),
            Point2D::new(50.0, 50.0),
            Point2D::new(0.0, 50.0),
            Point2D::new(0.0, 0.0),
        ];
        let d = Drawing::wall("wall-2".to_string(), &pts, "#000000", 4.0);
        assert_eq!(d.first_point(), d.last_point());
        assert_approx_eq!(d.length(), 200.0);
    }

    #[test]
    fn test_tool_serializes_lowercase() {
        let d = Drawing::wall("w".to_string(), &[], "#fff", 1.0);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["tool"], "wall");
        let tool: DrawingTool = serde_json::from_str("\"wall\"").unwrap();
        assert_eq!(tool, DrawingTool::Wall);
        assert!(serde_json::from_str::<DrawingTool>("\"pen\"").is_err());
    }

    #[test]
    fn test_length_of_empty_and_single_point() {
        let empty = Drawing::wall("w".to_string(), &[], "#fff", 1.0);
        assert_eq!(empty.length(), 0.0);
        let dot = Drawing::wall("w".to_string(), &[Point2D::new(3.0, 4.0)], "#fff", 1.0);
        assert_eq!(dot.length(), 0.0);
    }
}
