// src/dungeon/room.rs

use crate::map::DoorOrientation;
use crate::utils::Point2D;
use serde::{Deserialize, Serialize};

/// One side of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Unit vector pointing away from the room.
    pub fn outward(&self) -> (f64, f64) {
        match self {
            Edge::Top => (0.0, -1.0),
            Edge::Bottom => (0.0, 1.0),
            Edge::Left => (-1.0, 0.0),
            Edge::Right => (1.0, 0.0),
        }
    }

    /// True for edges running along the x axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// A door set into this edge runs along it.
    pub fn door_orientation(&self) -> DoorOrientation {
        if self.is_horizontal() {
            DoorOrientation::Horizontal
        } else {
            DoorOrientation::Vertical
        }
    }
}

/// Axis-aligned, grid-aligned room rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Room { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// True if the two rooms come closer than `padding` pixels on both axes.
    pub fn overlaps(&self, other: &Room, padding: i32) -> bool {
        self.x < other.right() + padding
            && self.right() + padding > other.x
            && self.y < other.bottom() + padding
            && self.bottom() + padding > other.y
    }

    /// The edge facing `target`, picked on whichever axis separates the two
    /// centers the most. Ties go to the vertical axis.
    pub fn facing_edge(&self, target: &Point2D) -> Edge {
        let center = self.center();
        let dx = target.x - center.x;
        let dy = target.y - center.y;
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Edge::Right
            } else {
                Edge::Left
            }
        } else if dy > 0.0 {
            Edge::Bottom
        } else {
            Edge::Top
        }
    }

    /// Point on `edge` where a corridor attaches: the middle grid line of the
    /// edge, so the point stays on a grid intersection.
    pub fn connection_point(&self, edge: Edge, grid_size: i32) -> Point2D {
        let cells_across = self.width / grid_size;
        let cells_down = self.height / grid_size;
        let mid_x = (self.x + (cells_across / 2) * grid_size) as f64;
        let mid_y = (self.y + (cells_down / 2) * grid_size) as f64;
        match edge {
            Edge::Top => Point2D::new(mid_x, self.y as f64),
            Edge::Bottom => Point2D::new(mid_x, self.bottom() as f64),
            Edge::Left => Point2D::new(self.x as f64, mid_y),
            Edge::Right => Point2D::new(self.right() as f64, mid_y),
        }
    }

    /// Returns `(fixed, start, end)`: the constant coordinate of the edge and
    /// its extent along the other axis.
    pub fn edge_span(&self, edge: Edge) -> (f64, f64, f64) {
        let (x0, y0) = (self.x as f64, self.y as f64);
        let (x1, y1) = (self.right() as f64, self.bottom() as f64);
        match edge {
            Edge::Top => (y0, x0, x1),
            Edge::Bottom => (y1, x0, x1),
            Edge::Left => (x0, y0, y1),
            Edge::Right => (x1, y0, y1),
        }
    }

    /// The edge `point` lies nearest to, if it is within `tolerance` of one.
    /// Ties resolve in `Edge::ALL` order.
    pub fn classify_point(&self, point: &Point2D, tolerance: f64) -> Option<Edge> {
        self.classify_point_preferring(point, tolerance, None)
    }

    /// Like [`Room::classify_point`], but a tie involving `preferred` goes to
    /// `preferred`. Corner points are equally close to two edges.
    pub fn classify_point_preferring(
        &self,
        point: &Point2D,
        tolerance: f64,
        preferred: Option<Edge>,
    ) -> Option<Edge> {
        let mut best: Option<(Edge, f64)> = None;
        for edge in Edge::ALL {
            let (fixed, start, end) = self.edge_span(edge);
            let (across, along) = if edge.is_horizontal() {
                (point.y, point.x)
            } else {
                (point.x, point.y)
            };
            let distance = (across - fixed).abs();
            if distance > tolerance || along < start - tolerance || along > end + tolerance {
                continue;
            }
            let wins = best.map_or(true, |(_, d)| {
                distance < d || (distance == d && preferred == Some(edge))
            });
            if wins {
                best = Some((edge, distance));
            }
        }
        best.map(|(edge, _)| edge)
    }

    /// True if `point` sits exactly on the rectangle outline.
    pub fn is_on_boundary(&self, point: &Point2D) -> bool {
        Edge::ALL.iter().any(|&edge| {
            let (fixed, start, end) = self.edge_span(edge);
            let (across, along) = if edge.is_horizontal() {
                (point.y, point.x)
            } else {
                (point.x, point.y)
            };
            across == fixed && along >= start && along <= end
        })
    }

    /// The outline as a closed polygon, starting and ending at the top-left corner.
    pub fn outline(&self) -> [Point2D; 5] {
        let (x0, y0) = (self.x as f64, self.y as f64);
        let (x1, y1) = (self.right() as f64, self.bottom() as f64);
        [
            Point2D::new(x0, y0),
            Point2D::new(x1, y0),
            Point2D::new(x1, y1),
            Point2D::new(x0, y1),
            Point2D::new(x0, y0),
        ]
    }
}
