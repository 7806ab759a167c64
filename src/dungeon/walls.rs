// src/dungeon/walls.rs
//! Room outlines with gaps cut where corridors attach.

use super::corridor::{Doorway, WallSegment};
use super::room::{Edge, Room};
use super::MIN_WALL_LENGTH;
use crate::utils::Point2D;
use log::warn;

/// A doorway point after it has been matched to a room edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedDoorway {
    pub point: Point2D,
    pub edge: Edge,
}

/// Wall geometry for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomWalls {
    /// Polylines to emit as wall drawings.
    pub polylines: Vec<Vec<Point2D>>,
    pub doorways: Vec<ClassifiedDoorway>,
}

/// Builds the walls of `room`, leaving a one-cell gap centered on each doorway.
///
/// A room without doorways becomes a single closed outline. Otherwise every
/// edge is handled on its own: a whole-edge wall if nothing attaches there,
/// or the pieces between the gaps, skipping pieces of 1px or less. A doorway
/// on a corner is filed under the edge its corridor approaches from.
pub fn build_room_walls(room: &Room, doorways: &[Doorway], grid_size: i32) -> RoomWalls {
    if doorways.is_empty() {
        return RoomWalls {
            polylines: vec![room.outline().to_vec()],
            doorways: Vec::new(),
        };
    }

    let grid = grid_size as f64;
    let tolerance = grid / 2.0;
    let mut classified = Vec::with_capacity(doorways.len());
    for doorway in doorways {
        let point = &doorway.point;
        match room.classify_point_preferring(point, tolerance, Some(doorway.edge)) {
            Some(edge) => classified.push(ClassifiedDoorway { point: *point, edge }),
            None => warn!(
                "doorway ({}, {}) is not on any edge of room at ({}, {}); ignoring it",
                point.x, point.y, room.x, room.y
            ),
        }
    }

    let mut polylines = Vec::new();
    for edge in Edge::ALL {
        let along: Vec<f64> = classified
            .iter()
            .filter(|d| d.edge == edge)
            .map(|d| if edge.is_horizontal() { d.point.x } else { d.point.y })
            .collect();
        for [a, b] in edge_walls(room, edge, along, grid / 2.0) {
            polylines.push(vec![a, b]);
        }
    }

    RoomWalls {
        polylines,
        doorways: classified,
    }
}

/// Splits one edge around gaps centered at the `along` positions.
fn edge_walls(room: &Room, edge: Edge, mut along: Vec<f64>, gap_half: f64) -> Vec<WallSegment> {
    let (fixed, start, end) = room.edge_span(edge);
    let at = |t: f64| {
        if edge.is_horizontal() {
            Point2D::new(t, fixed)
        } else {
            Point2D::new(fixed, t)
        }
    };

    along.sort_by(|a, b| a.total_cmp(b));
    let mut segments = Vec::with_capacity(along.len() + 1);
    let mut cursor = start;
    for center in along {
        let gap_start = (center - gap_half).min(end);
        if gap_start - cursor > MIN_WALL_LENGTH {
            segments.push([at(cursor), at(gap_start)]);
        }
        // Gaps may overlap; never walk backwards.
        cursor = cursor.max(center + gap_half);
    }
    if end - cursor > MIN_WALL_LENGTH {
        segments.push([at(cursor), at(end)]);
    }
    segments
}
