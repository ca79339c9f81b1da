//! Collision checks deciding whether a candidate room may be placed.
//!
//! The placement search treats the oracle as a pure predicate: given the
//! same candidate and the same placed rooms it must give the same answer.
//! Any `Fn(&Room, &[Room]) -> bool` closure is an oracle, and
//! [`RectOverlap`] is the default used by [`DungeonGenerator`](crate::DungeonGenerator).

use delve_core::{
    geometry::{Dimensions, Position, Rect},
    room::Room,
};

use crate::config::{CollisionConfig, WorldConfig};

/// Decides whether a candidate room can coexist with already placed rooms.
pub trait CollisionOracle {
    /// Returns true if `candidate` may be added next to `existing`.
    fn is_placeable(&self, candidate: &Room, existing: &[Room]) -> bool;
}

impl<F> CollisionOracle for F
where
    F: Fn(&Room, &[Room]) -> bool,
{
    fn is_placeable(&self, candidate: &Room, existing: &[Room]) -> bool {
        self(candidate, existing)
    }
}

/// Axis-aligned rectangle overlap test.
///
/// A candidate is rejected when its rectangle, grown by `margin` cells on
/// every side, shares area with any placed room. Rooms that merely touch
/// are accepted when the margin is zero. Optionally the candidate must also
/// lie fully inside the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectOverlap {
    margin: i32,
    world: Option<Rect>,
}

impl RectOverlap {
    /// Creates an oracle without margin or world bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the oracle described by the collision section of a configuration.
    pub fn from_config(collision: CollisionConfig, world: WorldConfig) -> Self {
        let oracle = Self::new().with_margin(collision.margin);
        if collision.within_world {
            oracle.within_world(Dimensions::new(world.width, world.height))
        } else {
            oracle
        }
    }

    /// Requires `margin` empty cells around every room (builder style).
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Requires candidates to stay inside `[0, width) × [0, height)` (builder style).
    pub fn within_world(mut self, world: Dimensions) -> Self {
        self.world = Some(world.at(Position::default()));
        self
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }
}

impl CollisionOracle for RectOverlap {
    fn is_placeable(&self, candidate: &Room, existing: &[Room]) -> bool {
        let bounds = candidate.bounds();

        if self.world.is_some_and(|world| !world.contains(bounds)) {
            return false;
        }

        let grown = bounds.inflate(self.margin);
        existing.iter().all(|room| !grown.intersects(room.bounds()))
    }
}
