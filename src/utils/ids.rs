// src/utils/ids.rs
//! Identifier sources for generated map objects.
//!
//! Drawings and doors need unique IDs once they are merged into a battlemap.
//! The default source hands out random UUIDs; [`SequentialIds`] produces
//! stable IDs so exported maps can be diffed between runs.

use uuid::Uuid;

pub trait IdSource: Send {
    /// Returns a fresh ID for an object of the given kind (e.g. `"wall"`, `"door"`).
    fn next_id(&mut self, kind: &str) -> String;
}

/// Random v4 UUIDs, prefixed with the object kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self, kind: &str) -> String {
        format!("{}-{}", kind, Uuid::new_v4())
    }
}

/// Monotonic counter shared across all kinds.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, kind: &str) -> String {
        self.next += 1;
        format!("{}-{}", kind, self.next)
    }
}
