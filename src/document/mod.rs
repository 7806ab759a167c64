// src/document/mod.rs
mod battlemap;

pub use self::battlemap::{Battlemap, BattlemapError, MapSnapshot, ObjType};
