// tests/properties.rs
//! Layout properties that must hold for any valid configuration and seed.

use dungeon_forge::dungeon::{DungeonGenerator, Edge, GeneratedDungeon, GeneratorConfig, Room};
use dungeon_forge::map::Drawing;
use dungeon_forge::utils::{Point2D, SequentialIds};
use proptest::prelude::*;

fn run(config: GeneratorConfig) -> (GeneratedDungeon, Vec<Room>) {
    let mut generator =
        DungeonGenerator::with_id_source(config, Box::new(SequentialIds::new())).unwrap();
    let dungeon = generator.generate();
    (dungeon, generator.rooms().to_vec())
}

/// True if some straight piece of `drawing` runs along `edge`'s line through `p`.
fn wall_covers(drawing: &Drawing, p: &Point2D, edge: Edge) -> bool {
    (1..drawing.vertex_count()).any(|i| {
        let (Some(a), Some(b)) = (drawing.vertex(i - 1), drawing.vertex(i)) else {
            return false;
        };
        if edge.is_horizontal() {
            a.y == p.y && b.y == p.y && a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x)
        } else {
            a.x == p.x && b.x == p.x && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
        }
    })
}

prop_compose! {
    fn any_config()(
        num_rooms in 1usize..14,
        min in 1u32..6,
        extra in 0u32..5,
        grid in prop::sample::select(vec![20u32, 32, 40, 50, 64]),
        width in 400u32..2400,
        height in 400u32..1600,
        seed in any::<u64>(),
    ) -> GeneratorConfig {
        GeneratorConfig::new(num_rooms)
            .with_room_size(min, min + extra)
            .with_grid_size(grid)
            .with_canvas(width, height)
            .with_seed(seed)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_seed_same_output(config in any_config()) {
        let (first, first_rooms) = run(config.clone());
        let (second, second_rooms) = run(config);
        prop_assert_eq!(first_rooms, second_rooms);
        prop_assert_eq!(first.drawings, second.drawings);
        prop_assert_eq!(first.doors, second.doors);
    }

    #[test]
    fn rooms_are_grid_aligned_and_apart(config in any_config()) {
        let grid = config.grid_size as i32;
        let (_, rooms) = run(config.clone());
        prop_assert!(rooms.len() <= config.num_rooms);
        for room in &rooms {
            prop_assert_eq!(room.x % grid, 0);
            prop_assert_eq!(room.y % grid, 0);
            prop_assert_eq!(room.width % grid, 0);
            prop_assert_eq!(room.height % grid, 0);
            prop_assert!(room.width > 0 && room.height > 0);
            prop_assert!(room.right() <= config.canvas_width as i32);
            prop_assert!(room.bottom() <= config.canvas_height as i32);
        }
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                prop_assert!(!a.overlaps(b, 2 * grid));
            }
        }
    }

    #[test]
    fn rooms_form_a_path(config in any_config()) {
        let (dungeon, rooms) = run(config);
        let corridors = rooms.len().saturating_sub(1);
        prop_assert_eq!(dungeon.stats.corridor_count, corridors);
        prop_assert_eq!(dungeon.doors.len(), 2 * corridors);
        prop_assert_eq!(dungeon.stats.room_count, rooms.len());
    }

    #[test]
    fn doors_sit_on_room_boundaries(config in any_config()) {
        let grid = config.grid_size as f64;
        let (dungeon, rooms) = run(config);
        for door in &dungeon.doors {
            let p = Point2D::new(door.x, door.y);
            prop_assert!(rooms.iter().any(|r| r.is_on_boundary(&p)));
            prop_assert_eq!(door.x % grid, 0.0);
            prop_assert_eq!(door.y % grid, 0.0);
        }
    }

    #[test]
    fn walls_are_never_degenerate(config in any_config()) {
        let (dungeon, _) = run(config);
        for drawing in &dungeon.drawings {
            prop_assert!(drawing.vertex_count() >= 2);
            for i in 1..drawing.vertex_count() {
                prop_assert_ne!(drawing.vertex(i - 1), drawing.vertex(i));
            }
        }
    }

    #[test]
    fn corridors_open_onto_their_rooms(config in any_config()) {
        let grid = config.grid_size as i32;
        let (dungeon, rooms) = run(config);
        for pair in rooms.windows(2) {
            for (room, other) in [(&pair[0], &pair[1]), (&pair[1], &pair[0])] {
                let edge = room.facing_edge(&other.center());
                let p = room.connection_point(edge, grid);
                prop_assert!(
                    dungeon.doors.iter().any(|d| {
                        d.x == p.x && d.y == p.y && d.orientation == edge.door_orientation()
                    }),
                    "no {:?} door at ({}, {}) on {:?}", edge, p.x, p.y, room
                );
                prop_assert!(
                    !dungeon.drawings.iter().any(|d| wall_covers(d, &p, edge)),
                    "doorway ({}, {}) on {:?} edge of {:?} is walled over", p.x, p.y, edge, room
                );
            }
        }
    }
}
