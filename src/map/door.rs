// src/map/door.rs
use serde::{Deserialize, Serialize};

/// Which way the door leaf runs across the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingDirection {
    Inward,
    Outward,
    Left,
    Right,
}

/// An interactive door placed on the battlemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub orientation: DoorOrientation,
    pub is_open: bool,
    pub is_locked: bool,
    pub size: f64,
    pub thickness: f64,
    pub swing_direction: SwingDirection,
}

impl Door {
    /// Creates a closed, unlocked door swinging inward.
    pub fn new(
        id: String,
        x: f64,
        y: f64,
        orientation: DoorOrientation,
        size: f64,
        thickness: f64,
    ) -> Self {
        Door {
            id,
            x,
            y,
            orientation,
            is_open: false,
            is_locked: false,
            size,
            thickness,
            swing_direction: SwingDirection::Inward,
        }
    }

    /// Opens or closes the door. Locked doors stay shut; returns whether the
    /// state actually changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if open && self.is_locked {
            return false;
        }
        let changed = self.is_open != open;
        self.is_open = open;
        changed
    }

    /// Locking a door also closes it.
    pub fn set_locked(&mut self, locked: bool) {
        self.is_locked = locked;
        if locked {
            self.is_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Door {
        Door::new("door-1".to_string(), 100.0, 50.0, DoorOrientation::Horizontal, 50.0, 8.0)
    }

    #[test]
    fn test_defaults() {
        let d = door();
        assert!(!d.is_open);
        assert!(!d.is_locked);
        assert_eq!(d.swing_direction, SwingDirection::Inward);
    }

    #[test]
    fn test_locked_door_refuses_to_open() {
        let mut d = door();
        assert!(d.set_open(true));
        d.set_locked(true);
        assert!(!d.is_open);
        assert!(!d.set_open(true));
        assert!(!d.is_open);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(door()).unwrap();
        assert_eq!(json["orientation"], "horizontal");
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["isLocked"], false);
        assert_eq!(json["swingDirection"], "inward");
    }
}
