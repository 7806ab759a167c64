// src/document/battlemap.rs

use crate::dungeon::GeneratedDungeon;
use crate::map::{Door, Drawing};
use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjType {
    Drawings,
    Walls,
    Doors,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattlemapError {
    #[error("door '{0}' not found")]
    DoorNotFound(String),

    #[error("drawing '{0}' not found")]
    DrawingNotFound(String),

    #[error("dungeon was generated on a {generated}px grid but the map uses {map}px")]
    GridMismatch { map: u32, generated: u32 },
}

/// Plain copy of a battlemap's contents, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSnapshot {
    pub name: String,
    pub grid_size: u32,
    pub drawings: Vec<Drawing>,
    pub doors: Vec<Door>,
}

/// A single map of a campaign. Drawings and doors live behind shared locks so
/// the canvas and the editing tools can hold on to them independently.
pub struct Battlemap {
    name: String,
    grid_size: u32,
    pub drawings: Arc<RwLock<Vec<Arc<Drawing>>>>,
    pub doors: Arc<RwLock<Vec<Arc<Door>>>>,
}

impl Battlemap {
    pub fn new(name: &str, grid_size: u32) -> Self {
        Self {
            name: name.to_string(),
            grid_size,
            drawings: Arc::new(RwLock::new(Vec::new())),
            doors: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    // Thread-safe getters.
    pub fn drawings(&self) -> Arc<RwLock<Vec<Arc<Drawing>>>> {
        Arc::clone(&self.drawings)
    }
    pub fn doors(&self) -> Arc<RwLock<Vec<Arc<Door>>>> {
        Arc::clone(&self.doors)
    }

    pub fn num_objects(&self, obj_type: ObjType) -> usize {
        match obj_type {
            ObjType::Drawings => self.drawings.read().len(),
            ObjType::Walls => self.drawings.read().iter().filter(|d| d.is_wall()).count(),
            ObjType::Doors => self.doors.read().len(),
        }
    }

    /// Adds a drawing and returns its index.
    pub fn add_drawing(&mut self, drawing: Drawing) -> usize {
        let mut drawings = self.drawings.write();
        drawings.push(Arc::new(drawing));
        drawings.len() - 1
    }

    /// Removes a drawing by ID.
    pub fn remove_drawing(&mut self, id: &str) -> Result<Drawing, BattlemapError> {
        let mut drawings = self.drawings.write();
        let index = drawings
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| BattlemapError::DrawingNotFound(id.to_string()))?;
        let removed = drawings.remove(index);
        Ok(Arc::try_unwrap(removed).unwrap_or_else(|shared| (*shared).clone()))
    }

    /// Adds a door and returns its index.
    pub fn add_door(&mut self, door: Door) -> usize {
        let mut doors = self.doors.write();
        doors.push(Arc::new(door));
        doors.len() - 1
    }

    /// Appends the generated walls and doors to the map.
    pub fn apply_dungeon(&mut self, dungeon: &GeneratedDungeon) -> Result<(), BattlemapError> {
        if dungeon.stats.grid_size != self.grid_size {
            return Err(BattlemapError::GridMismatch {
                map: self.grid_size,
                generated: dungeon.stats.grid_size,
            });
        }
        {
            let mut drawings = self.drawings.write();
            drawings.extend(dungeon.drawings.iter().cloned().map(Arc::new));
        }
        {
            let mut doors = self.doors.write();
            doors.extend(dungeon.doors.iter().cloned().map(Arc::new));
        }
        info!(
            "map '{}': merged {} walls and {} doors",
            self.name,
            dungeon.drawings.len(),
            dungeon.doors.len()
        );
        Ok(())
    }

    /// Clears the map's geometry, then applies the dungeon.
    pub fn replace_with_dungeon(&mut self, dungeon: &GeneratedDungeon) -> Result<(), BattlemapError> {
        if dungeon.stats.grid_size != self.grid_size {
            return Err(BattlemapError::GridMismatch {
                map: self.grid_size,
                generated: dungeon.stats.grid_size,
            });
        }
        self.clear_geometry();
        self.apply_dungeon(dungeon)
    }

    /// Opens or closes a door. Returns whether the door changed; a locked door
    /// stays shut.
    pub fn set_door_open(&mut self, id: &str, open: bool) -> Result<bool, BattlemapError> {
        self.with_door(id, |door| door.set_open(open))
    }

    /// Flips a door between open and closed. Returns the new open state.
    pub fn toggle_door(&mut self, id: &str) -> Result<bool, BattlemapError> {
        self.with_door(id, |door| {
            let open = !door.is_open;
            door.set_open(open);
            door.is_open
        })
    }

    pub fn set_door_locked(&mut self, id: &str, locked: bool) -> Result<(), BattlemapError> {
        self.with_door(id, |door| door.set_locked(locked))
    }

    fn with_door<T>(&mut self, id: &str, f: impl FnOnce(&mut Door) -> T) -> Result<T, BattlemapError> {
        let mut doors = self.doors.write();
        let door = doors
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| BattlemapError::DoorNotFound(id.to_string()))?;
        let result = f(Arc::make_mut(door));
        debug!("door '{}': open={} locked={}", id, door.is_open, door.is_locked);
        Ok(result)
    }

    /// Removes every drawing and door.
    pub fn clear_geometry(&mut self) {
        self.drawings.write().clear();
        self.doors.write().clear();
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            name: self.name.clone(),
            grid_size: self.grid_size,
            drawings: self.drawings.read().iter().map(|d| (**d).clone()).collect(),
            doors: self.doors.read().iter().map(|d| (**d).clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{DungeonGenerator, GeneratorConfig};
    use crate::map::DoorOrientation;
    use crate::utils::{Point2D, SequentialIds};

    fn dungeon(seed: u64) -> GeneratedDungeon {
        let config = GeneratorConfig::new(5).with_seed(seed);
        DungeonGenerator::with_id_source(config, Box::new(SequentialIds::new()))
            .unwrap()
            .generate()
    }

    #[test]
    fn test_apply_dungeon_merges() {
        let mut map = Battlemap::new("Crypt", 50);
        map.add_drawing(Drawing::wall(
            "sketch".to_string(),
            &[Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0)],
            "#000",
            2.0,
        ));
        let generated = dungeon(1);
        map.apply_dungeon(&generated).unwrap();
        assert_eq!(map.num_objects(ObjType::Drawings), generated.drawings.len() + 1);
        assert_eq!(map.num_objects(ObjType::Doors), generated.doors.len());
    }

    #[test]
    fn test_replace_with_dungeon_clears_first() {
        let mut map = Battlemap::new("Crypt", 50);
        map.apply_dungeon(&dungeon(1)).unwrap();
        let second = dungeon(2);
        map.replace_with_dungeon(&second).unwrap();
        assert_eq!(map.num_objects(ObjType::Walls), second.drawings.len());
        assert_eq!(map.snapshot().doors, second.doors);
    }

    #[test]
    fn test_grid_mismatch_is_rejected() {
        let mut map = Battlemap::new("Caves", 70);
        let err = map.apply_dungeon(&dungeon(3)).unwrap_err();
        assert_eq!(err, BattlemapError::GridMismatch { map: 70, generated: 50 });
        assert_eq!(map.num_objects(ObjType::Drawings), 0);
    }

    #[test]
    fn test_door_state_changes() {
        let mut map = Battlemap::new("Keep", 50);
        map.add_door(Door::new("door-1".to_string(), 50.0, 0.0, DoorOrientation::Vertical, 50.0, 8.0));
        assert_eq!(map.toggle_door("door-1"), Ok(true));
        assert_eq!(map.toggle_door("door-1"), Ok(false));
        map.set_door_locked("door-1", true).unwrap();
        assert_eq!(map.set_door_open("door-1", true), Ok(false));
        assert_eq!(map.toggle_door("door-1"), Ok(false));
        map.set_door_locked("door-1", false).unwrap();
        assert_eq!(map.set_door_open("door-1", true), Ok(true));
        assert_eq!(
            map.toggle_door("missing"),
            Err(BattlemapError::DoorNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_door_change_is_not_visible_through_old_snapshot() {
        let mut map = Battlemap::new("Keep", 50);
        map.add_door(Door::new("d".to_string(), 0.0, 0.0, DoorOrientation::Horizontal, 50.0, 8.0));
        let before = map.snapshot();
        map.toggle_door("d").unwrap();
        assert!(!before.doors[0].is_open);
        assert!(map.snapshot().doors[0].is_open);
    }

    #[test]
    fn test_remove_drawing() {
        let mut map = Battlemap::new("Keep", 50);
        map.apply_dungeon(&dungeon(4)).unwrap();
        let count = map.num_objects(ObjType::Drawings);
        let id = map.drawings().read()[0].id.clone();
        let removed = map.remove_drawing(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(map.num_objects(ObjType::Drawings), count - 1);
        assert!(matches!(
            map.remove_drawing(&id),
            Err(BattlemapError::DrawingNotFound(_))
        ));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut map = Battlemap::new("Vault", 50);
        map.apply_dungeon(&dungeon(5)).unwrap();
        let json = serde_json::to_value(map.snapshot()).unwrap();
        assert_eq!(json["name"], "Vault");
        assert_eq!(json["gridSize"], 50);
        assert!(json["drawings"].as_array().unwrap().len() > 0);
    }
}
