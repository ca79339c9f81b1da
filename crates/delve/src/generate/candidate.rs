//! Random candidate geometry for a single room.

use delve_core::{
    geometry::{Dimensions, Direction, IntRange, Position},
    room::{Room, RoomType},
};

use crate::{
    config::{GeneratorConfig, RoomSizes, WorldConfig},
    random::RandomSource,
};

/// Draws candidate values for each axis of the placement search.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    world: WorldConfig,
    distance: IntRange,
    sizes: RoomSizes,
}

impl CandidateGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            world: config.world(),
            distance: config.distance(),
            sizes: config.rooms().clone(),
        }
    }

    /// Direction from the parent towards the new room.
    ///
    /// Always [`Direction::DOWN`]: only downward placement is supported.
    pub fn direction(&self) -> Direction {
        Direction::DOWN
    }

    /// Draws width and height independently from the ranges of `room_type`.
    pub fn dimensions<R>(&self, rng: &mut R, room_type: RoomType) -> Dimensions
    where
        R: RandomSource + ?Sized,
    {
        let range = self.sizes.for_type(room_type);
        let width = rng.random_in(range.width);
        let height = rng.random_in(range.height);
        Dimensions::new(width, height)
    }

    /// Draws the gap between the parent's far edge and the new room.
    pub fn distance<R>(&self, rng: &mut R) -> i32
    where
        R: RandomSource + ?Sized,
    {
        rng.random_in(self.distance)
    }

    /// Computes the top-left corner of the new room.
    ///
    /// The root room is centered in the world. Other rooms sit `distance`
    /// cells past their parent along `direction`, at `x = 0`.
    pub fn position(
        &self,
        parent: Option<&Room>,
        direction: Direction,
        dimensions: Dimensions,
        distance: i32,
    ) -> Position {
        let Some(parent) = parent else {
            return Position::new(
                self.world.width.div_euclid(2) - dimensions.width.div_euclid(2),
                self.world.height.div_euclid(2) - dimensions.height.div_euclid(2),
            );
        };

        // Horizontal placement is not randomized yet.
        let step = parent.dimensions().height.saturating_add(distance);
        let y = parent
            .position()
            .y
            .saturating_add(direction.dy().saturating_mul(step));
        Position::new(0, y)
    }
}
