// src/dungeon/corridor.rs

use super::rng::DungeonRng;
use super::room::{Edge, Room};
use super::{CONNECTION_NUDGE, MIN_WALL_LENGTH};
use crate::utils::Point2D;
use log::debug;

/// Where a corridor meets a room. `room` indexes the generator's room list;
/// `edge` is the side the corridor approaches from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Doorway {
    pub room: usize,
    pub point: Point2D,
    pub edge: Edge,
}

/// An L-shaped corridor between two rooms: `start -> bend -> end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    pub from: Doorway,
    pub to: Doorway,
    pub start: Point2D,
    pub bend: Point2D,
    pub end: Point2D,
    pub horizontal_first: bool,
}

/// A straight wall piece.
pub type WallSegment = [Point2D; 2];

impl Corridor {
    /// Lays out a corridor from `rooms[from]` to `rooms[to]`. Each room's
    /// doorway sits on the edge facing the other room; the corridor path starts
    /// just outside those doorways so its walls never sit on the room walls.
    pub fn plan(rooms: &[Room], from: usize, to: usize, grid_size: i32, rng: &mut DungeonRng) -> Self {
        let (room_a, room_b) = (&rooms[from], &rooms[to]);
        let edge_a = room_a.facing_edge(&room_b.center());
        let edge_b = room_b.facing_edge(&room_a.center());
        let point_a = room_a.connection_point(edge_a, grid_size);
        let point_b = room_b.connection_point(edge_b, grid_size);

        let start = nudge(point_a, edge_a);
        let end = nudge(point_b, edge_b);
        let horizontal_first = rng.coin();
        let bend = if horizontal_first {
            Point2D::new(end.x, start.y)
        } else {
            Point2D::new(start.x, end.y)
        };

        debug!(
            "corridor {} -> {}: {:?} ({}, {}) to {:?} ({}, {}), {} first",
            from,
            to,
            edge_a,
            point_a.x,
            point_a.y,
            edge_b,
            point_b.x,
            point_b.y,
            if horizontal_first { "horizontal" } else { "vertical" }
        );

        Corridor {
            from: Doorway { room: from, point: point_a, edge: edge_a },
            to: Doorway { room: to, point: point_b, edge: edge_b },
            start,
            bend,
            end,
            horizontal_first,
        }
    }

    /// The corridor's side walls, two per leg, offset `half_width` either side
    /// of the path. Legs too short to draw are left out.
    pub fn walls(&self, half_width: f64) -> Vec<WallSegment> {
        let mut walls = Vec::with_capacity(4);
        walls.extend(leg_walls(self.start, self.bend, self.horizontal_first, half_width));
        walls.extend(leg_walls(self.bend, self.end, !self.horizontal_first, half_width));
        walls
    }
}

fn nudge(point: Point2D, edge: Edge) -> Point2D {
    let (dx, dy) = edge.outward();
    point.offset(dx * CONNECTION_NUDGE, dy * CONNECTION_NUDGE)
}

fn leg_walls(a: Point2D, b: Point2D, horizontal: bool, half_width: f64) -> Vec<WallSegment> {
    if a.distance_to(&b) <= MIN_WALL_LENGTH {
        return Vec::new();
    }
    let (dx, dy) = if horizontal { (0.0, half_width) } else { (half_width, 0.0) };
    vec![
        [a.offset(-dx, -dy), b.offset(-dx, -dy)],
        [a.offset(dx, dy), b.offset(dx, dy)],
    ]
}
