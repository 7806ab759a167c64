// src/lib.rs

pub mod document;
pub mod dungeon;
pub mod map;
pub mod utils;
