//! Pre-order traversal placing every room of a dungeon graph.

use log::{debug, info};

use delve_core::{
    graph::{GraphDungeon, GraphError, GraphRoom},
    room::Room,
};

use crate::{
    DelveError, collision::CollisionOracle, generate::placer::RoomPlacer,
    random::RandomSource,
};

/// Counters collected while walking a dungeon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    rooms: usize,
    candidates: u64,
}

impl GenerationStats {
    /// Number of rooms placed.
    pub fn rooms(&self) -> usize {
        self.rooms
    }

    /// Number of candidates evaluated across all rooms.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }
}

/// Walks the dungeon graph from the root, parents before children.
///
/// Children are visited in declaration order. Every room is placed against
/// all rooms placed before it in traversal order, siblings' subtrees
/// included. Placed rooms are appended to a single list which is never
/// copied.
pub struct TreeWalker<'a, O: ?Sized> {
    dungeon: &'a GraphDungeon,
    placer: RoomPlacer<'a, O>,
}

impl<'a, O> TreeWalker<'a, O>
where
    O: CollisionOracle + ?Sized,
{
    pub fn new(dungeon: &'a GraphDungeon, placer: RoomPlacer<'a, O>) -> Self {
        Self { dungeon, placer }
    }

    /// Places every room reachable from the root, in pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`DelveError::Graph`] if the graph is not a single tree rooted
    /// at `"start"`, checked before any room is placed, and
    /// [`DelveError::Placement`] for the first room that cannot be placed.
    /// No rooms are returned on error.
    pub fn walk<R>(&self, rng: &mut R) -> Result<(Vec<Room>, GenerationStats), DelveError>
    where
        R: RandomSource + ?Sized,
    {
        self.dungeon.validate()?;
        let root = self.dungeon.root().ok_or(GraphError::MissingRoot)?;
        info!(rooms = self.dungeon.len(); "Placing dungeon rooms");

        let mut placed: Vec<Room> = Vec::with_capacity(self.dungeon.len());
        let mut stats = GenerationStats::default();

        // Children are pushed in reverse so the first child is visited next.
        let mut pending: Vec<&GraphRoom> = vec![root];
        while let Some(graph_room) = pending.pop() {
            debug!(room:% = graph_room.id(); "Generating room");

            let placement = self.placer.place(rng, &placed, graph_room)?;
            stats.rooms += 1;
            stats.candidates += placement.candidates();
            placed.push(placement.into_room());

            for &child in graph_room.children().iter().rev() {
                let child_room = self.dungeon.room(child).ok_or(GraphError::UnknownChild {
                    room: graph_room.id(),
                    child,
                })?;
                pending.push(child_room);
            }
        }

        Ok((placed, stats))
    }
}
