//! Configuration types for dungeon generation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources, and every section falls back to its default when
//! omitted.
//!
//! # Overview
//!
//! - [`GeneratorConfig`] - Top-level configuration combining every section.
//! - [`WorldConfig`] - World size used to center the root room.
//! - [`SearchBudget`] - Attempts per axis of the placement search.
//! - [`RoomSizes`] - Dimension ranges per [`RoomType`].
//! - [`CollisionConfig`] - Settings of the default collision oracle.
//!
//! # Example
//!
//! ```
//! # use delve::config::GeneratorConfig;
//! let config = GeneratorConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.budget().total(), 100_000);
//! ```

use serde::Deserialize;

use delve_core::{geometry::IntRange, room::RoomType};

use crate::DelveError;

/// Largest accepted world side, room side, distance and collision margin.
///
/// Keeps every coordinate computed during generation well inside `i32`.
pub const MAX_EXTENT: i32 = 1 << 16;

/// Top-level generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for reproducible layouts. Operating system entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    #[serde(default)]
    world: WorldConfig,

    #[serde(default)]
    budget: SearchBudget,

    /// Gap between a parent's bottom edge and its child's top edge.
    #[serde(default = "default_distance")]
    distance: IntRange,

    #[serde(default)]
    rooms: RoomSizes,

    #[serde(default)]
    collision: CollisionConfig,
}

fn default_distance() -> IntRange {
    IntRange::new(2, 4)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            world: WorldConfig::default(),
            budget: SearchBudget::default(),
            distance: default_distance(),
            rooms: RoomSizes::default(),
            collision: CollisionConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the seed (builder style).
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn world(&self) -> WorldConfig {
        self.world
    }

    /// Sets the world size (builder style).
    pub fn with_world(mut self, world: WorldConfig) -> Self {
        self.world = world;
        self
    }

    pub fn budget(&self) -> SearchBudget {
        self.budget
    }

    /// Sets the search budget (builder style).
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn distance(&self) -> IntRange {
        self.distance
    }

    /// Sets the parent/child distance range (builder style).
    pub fn with_distance(mut self, distance: IntRange) -> Self {
        self.distance = distance;
        self
    }

    pub fn rooms(&self) -> &RoomSizes {
        &self.rooms
    }

    pub fn collision(&self) -> CollisionConfig {
        self.collision
    }

    /// Sets the collision settings (builder style).
    pub fn with_collision(mut self, collision: CollisionConfig) -> Self {
        self.collision = collision;
        self
    }

    /// Checks that every range can be sampled, every budget is non-zero and
    /// no length exceeds [`MAX_EXTENT`].
    ///
    /// # Errors
    ///
    /// Returns [`DelveError::Config`] describing the first invalid setting.
    pub fn validate(&self) -> Result<(), DelveError> {
        if self.world.width <= 0 || self.world.height <= 0 {
            return Err(DelveError::Config(format!(
                "world size must be positive, got {}x{}",
                self.world.width, self.world.height
            )));
        }
        if self.world.width > MAX_EXTENT || self.world.height > MAX_EXTENT {
            return Err(DelveError::Config(format!(
                "world size must be at most {MAX_EXTENT}x{MAX_EXTENT}, got {}x{}",
                self.world.width, self.world.height
            )));
        }

        let budget = self.budget;
        if budget.directions == 0
            || budget.dimensions == 0
            || budget.distances == 0
            || budget.positions == 0
        {
            return Err(DelveError::Config(format!(
                "search budget attempts must be non-zero, got {budget:?}"
            )));
        }

        check_range("distance", self.distance, 0)?;

        for room_type in RoomType::ALL {
            let sizes = self.rooms.for_type(room_type);
            check_range(&format!("{room_type} width"), sizes.width, 1)?;
            check_range(&format!("{room_type} height"), sizes.height, 1)?;
        }

        if !(0..=MAX_EXTENT).contains(&self.collision.margin) {
            return Err(DelveError::Config(format!(
                "collision margin must be between 0 and {MAX_EXTENT}, got {}",
                self.collision.margin
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, range: IntRange, lowest: i32) -> Result<(), DelveError> {
    if range.is_empty() {
        return Err(DelveError::Config(format!(
            "{name} range is empty: min {} > max {}",
            range.min, range.max
        )));
    }
    if range.min < lowest {
        return Err(DelveError::Config(format!(
            "{name} range must start at {lowest} or above, got {}",
            range.min
        )));
    }
    if range.max > MAX_EXTENT {
        return Err(DelveError::Config(format!(
            "{name} range must end at {MAX_EXTENT} or below, got {}",
            range.max
        )));
    }
    Ok(())
}

/// Size of the world the root room is centered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
}

impl WorldConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

/// Number of attempts made on each axis of the placement search.
///
/// The axes nest from `directions` (outermost) to `positions` (innermost),
/// so a single room evaluates at most [`SearchBudget::total`] candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchBudget {
    pub directions: u32,
    pub dimensions: u32,
    pub distances: u32,
    pub positions: u32,
}

impl SearchBudget {
    pub fn new(directions: u32, dimensions: u32, distances: u32, positions: u32) -> Self {
        Self {
            directions,
            dimensions,
            distances,
            positions,
        }
    }

    /// Upper bound of candidates evaluated for one room.
    pub fn total(self) -> u64 {
        u64::from(self.directions)
            * u64::from(self.dimensions)
            * u64::from(self.distances)
            * u64::from(self.positions)
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(10, 10, 10, 100)
    }
}

/// Width and height ranges for one room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub width: IntRange,
    pub height: IntRange,
}

impl SizeRange {
    /// Square range with the same bounds on both axes.
    pub const fn square(min: i32, max: i32) -> Self {
        Self {
            width: IntRange::new(min, max),
            height: IntRange::new(min, max),
        }
    }
}

/// Dimension ranges keyed by [`RoomType`].
///
/// Each axis that a configuration leaves out keeps the default range of
/// its room type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PartialRoomSizes")]
pub struct RoomSizes {
    start: SizeRange,
    room: SizeRange,
    end: SizeRange,
}

impl RoomSizes {
    pub fn new(start: SizeRange, room: SizeRange, end: SizeRange) -> Self {
        Self { start, room, end }
    }

    /// Returns the ranges rooms of `room_type` are drawn from.
    pub fn for_type(&self, room_type: RoomType) -> SizeRange {
        match room_type {
            RoomType::Start => self.start,
            RoomType::Room => self.room,
            RoomType::End => self.end,
        }
    }
}

impl Default for RoomSizes {
    fn default() -> Self {
        Self {
            start: SizeRange::square(5, 6),
            room: SizeRange::square(8, 12),
            end: SizeRange::square(5, 7),
        }
    }
}

/// `[rooms]` section as written, before falling back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialRoomSizes {
    start: PartialSizeRange,
    room: PartialSizeRange,
    end: PartialSizeRange,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialSizeRange {
    width: Option<IntRange>,
    height: Option<IntRange>,
}

impl PartialSizeRange {
    fn or(self, fallback: SizeRange) -> SizeRange {
        SizeRange {
            width: self.width.unwrap_or(fallback.width),
            height: self.height.unwrap_or(fallback.height),
        }
    }
}

impl From<PartialRoomSizes> for RoomSizes {
    fn from(partial: PartialRoomSizes) -> Self {
        let defaults = RoomSizes::default();
        Self {
            start: partial.start.or(defaults.start),
            room: partial.room.or(defaults.room),
            end: partial.end.or(defaults.end),
        }
    }
}

/// Settings for the default rectangle collision oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Empty cells required around every room.
    pub margin: i32,

    /// Reject rooms leaving the `[0, width) × [0, height)` world.
    pub within_world: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();

        assert_eq!(config.seed(), None);
        assert_eq!(config.world(), WorldConfig::new(100, 100));
        assert_eq!(config.budget(), SearchBudget::new(10, 10, 10, 100));
        assert_eq!(config.distance(), IntRange::new(2, 4));
        assert_eq!(
            config.rooms().for_type(RoomType::Start),
            SizeRange::square(5, 6)
        );
        assert_eq!(
            config.rooms().for_type(RoomType::Room),
            SizeRange::square(8, 12)
        );
        assert_eq!(config.rooms().for_type(RoomType::End), SizeRange::square(5, 7));
        assert_eq!(config.collision(), CollisionConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            seed = 42

            [world]
            width = 40
            height = 30

            [budget]
            positions = 5

            [rooms.end]
            width = { min = 3, max = 4 }
            height = { min = 2, max = 2 }
            "#,
        )
        .unwrap();

        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.world(), WorldConfig::new(40, 30));
        assert_eq!(config.budget(), SearchBudget::new(10, 10, 10, 5));
        assert_eq!(config.distance(), IntRange::new(2, 4));
        let end = config.rooms().for_type(RoomType::End);
        assert_eq!(end.width, IntRange::new(3, 4));
        assert_eq!(end.height, IntRange::new(2, 2));
        assert_eq!(
            config.rooms().for_type(RoomType::Start),
            SizeRange::square(5, 6)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: GeneratorConfig = toml::from_str("").unwrap();
        assert_eq!(config.budget().total(), 100_000);
    }

    #[test]
    fn test_validate_rejects_bad_world() {
        let config = GeneratorConfig::default().with_world(WorldConfig::new(0, 10));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("world size must be positive"));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let config = GeneratorConfig::default().with_budget(SearchBudget::new(10, 0, 10, 100));
        assert!(matches!(config.validate(), Err(DelveError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_distance() {
        let config = GeneratorConfig::default().with_distance(IntRange::new(4, 2));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distance range is empty"));
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            [rooms.room]
            width = { min = 0, max = 3 }
            height = { min = 1, max = 3 }
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("room width range must start at 1"));
    }

    #[test]
    fn test_validate_rejects_negative_margin() {
        let config = GeneratorConfig::default().with_collision(CollisionConfig {
            margin: -1,
            within_world: false,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_margin() {
        let config = GeneratorConfig::default().with_collision(CollisionConfig {
            margin: i32::MAX,
            within_world: false,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collision margin must be between 0 and"));
    }

    #[test]
    fn test_validate_rejects_huge_distance() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            seed = 1

            [distance]
            min = 2147483600
            max = 2147483647
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distance range must end at 65536 or below"));
    }

    #[test]
    fn test_validate_rejects_huge_rooms_and_world() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            [rooms.end]
            height = { min = 5, max = 100000 }
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("end height range must end at"));

        let config = GeneratorConfig::default().with_world(WorldConfig::new(MAX_EXTENT + 1, 10));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("world size must be at most"));

        let config = GeneratorConfig::default()
            .with_world(WorldConfig::new(MAX_EXTENT, MAX_EXTENT))
            .with_distance(IntRange::new(0, MAX_EXTENT));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            [world]
            width = 40

            [rooms.room]
            height = { min = 3, max = 4 }
            "#,
        )
        .unwrap();

        assert_eq!(config.world(), WorldConfig::new(40, 100));
        let room = config.rooms().for_type(RoomType::Room);
        assert_eq!(room.width, IntRange::new(8, 12));
        assert_eq!(room.height, IntRange::new(3, 4));
        assert_eq!(
            config.rooms().for_type(RoomType::End),
            SizeRange::square(5, 7)
        );
        assert!(config.validate().is_ok());
    }
}
