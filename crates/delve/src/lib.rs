//! Delve - procedural placement of dungeon rooms.
//!
//! Given an abstract room graph ([`graph::GraphDungeon`]), Delve computes a
//! non-overlapping rectangle for every room. Each child room is stacked
//! below its parent, and the final layout is translated so that every
//! coordinate is non-negative.

pub mod collision;
pub mod config;
pub mod generate;
pub mod random;

mod error;

pub use delve_core::{geometry, graph, identifier, room};

pub use error::{DelveError, PlacementFailure};

use log::{debug, info};

use collision::{CollisionOracle, RectOverlap};
use config::GeneratorConfig;
use generate::{CandidateGenerator, RoomPlacer, TreeWalker};
use graph::GraphDungeon;
use random::{RandomSource, RngSource};
use room::Room;

/// Entry point for generating dungeon layouts.
///
/// # Examples
///
/// ```rust
/// use delve::{DungeonGenerator, config::GeneratorConfig, graph::GraphDungeon, room::RoomType};
///
/// let mut dungeon = GraphDungeon::with_root(RoomType::Start);
/// dungeon.add_child("start", "end", RoomType::End).unwrap();
///
/// let generator = DungeonGenerator::new(GeneratorConfig::default().with_seed(Some(7)));
/// let rooms = generator.generate(&dungeon).expect("Failed to generate");
///
/// assert_eq!(rooms.len(), 2);
/// assert!(rooms.iter().all(|room| room.position().x >= 0 && room.position().y >= 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    /// Create a new generator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - World size, search budget, size ranges and collision settings
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a layout using the configured seed and collision oracle.
    ///
    /// Without a configured seed the random source is seeded from the
    /// operating system.
    ///
    /// # Errors
    ///
    /// See [`DungeonGenerator::generate_with`].
    pub fn generate(&self, dungeon: &GraphDungeon) -> Result<Vec<Room>, DelveError> {
        let oracle = RectOverlap::from_config(self.config.collision(), self.config.world());

        match self.config.seed() {
            Some(seed) => {
                debug!(seed; "Using seeded random source");
                self.generate_with(dungeon, &mut RngSource::seeded(seed), &oracle)
            }
            None => self.generate_with(dungeon, &mut RngSource::from_os(), &oracle),
        }
    }

    /// Generate a layout with an explicit random source and collision oracle.
    ///
    /// The configuration and graph are validated before any room is placed.
    /// Rooms are returned in pre-order, parents before children.
    ///
    /// # Arguments
    ///
    /// * `dungeon` - The room graph to lay out
    /// * `rng` - Source of every random draw of the search
    /// * `oracle` - Decides whether a candidate collides with placed rooms
    ///
    /// # Errors
    ///
    /// Returns `DelveError` for:
    /// - An invalid configuration
    /// - A malformed graph (missing root, dangling references, cycles, ...)
    /// - The first room whose search budget runs out
    pub fn generate_with<R, O>(
        &self,
        dungeon: &GraphDungeon,
        rng: &mut R,
        oracle: &O,
    ) -> Result<Vec<Room>, DelveError>
    where
        R: RandomSource + ?Sized,
        O: CollisionOracle + ?Sized,
    {
        self.config.validate()?;

        let candidates = CandidateGenerator::new(&self.config);
        let placer = RoomPlacer::new(&candidates, self.config.budget(), oracle);
        let (rooms, stats) = TreeWalker::new(dungeon, placer).walk(rng)?;

        let rooms = generate::normalize(rooms);
        info!(
            rooms = stats.rooms(),
            candidates = stats.candidates();
            "Dungeon generated"
        );

        Ok(rooms)
    }
}
