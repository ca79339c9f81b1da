//! Bounded randomized search placing a single room.

use log::{debug, trace, warn};

use delve_core::{graph::GraphRoom, room::Room};

use crate::{
    collision::CollisionOracle, config::SearchBudget, error::PlacementFailure,
    generate::candidate::CandidateGenerator, random::RandomSource,
};

/// A room accepted by the collision oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    room: Room,
    candidates: u64,
}

impl Placement {
    /// Returns the placed room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Returns how many candidates were evaluated, the accepted one included.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    pub fn into_room(self) -> Room {
        self.room
    }
}

/// Places rooms one at a time against the rooms placed so far.
///
/// The search nests four bounded loops, from the outermost: direction,
/// dimensions, distance, position. Each level redraws its own value only,
/// so positions are explored most densely and directions least. The first
/// candidate the oracle accepts wins.
pub struct RoomPlacer<'a, O: ?Sized> {
    candidates: &'a CandidateGenerator,
    budget: SearchBudget,
    oracle: &'a O,
}

impl<'a, O> RoomPlacer<'a, O>
where
    O: CollisionOracle + ?Sized,
{
    pub fn new(candidates: &'a CandidateGenerator, budget: SearchBudget, oracle: &'a O) -> Self {
        Self {
            candidates,
            budget,
            oracle,
        }
    }

    /// Finds a geometry for `graph_room` that does not collide with `existing`.
    ///
    /// The parent is looked up in `existing` by id; a room without parent is
    /// treated as the root.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementFailure`] once every level of the budget is
    /// exhausted without an accepted candidate.
    pub fn place<R>(
        &self,
        rng: &mut R,
        existing: &[Room],
        graph_room: &GraphRoom,
    ) -> Result<Placement, PlacementFailure>
    where
        R: RandomSource + ?Sized,
    {
        let parent = graph_room
            .parent()
            .and_then(|parent_id| existing.iter().find(|room| room.id() == parent_id));
        if parent.is_none() && graph_room.parent().is_some() {
            warn!(room:% = graph_room.id(); "Parent not placed yet, placing room as a root");
        }

        let mut evaluated: u64 = 0;

        for _ in 0..self.budget.directions {
            let direction = self.candidates.direction();

            for _ in 0..self.budget.dimensions {
                let dimensions = self.candidates.dimensions(rng, graph_room.room_type());

                for _ in 0..self.budget.distances {
                    let distance = self.candidates.distance(rng);

                    for _ in 0..self.budget.positions {
                        let position =
                            self.candidates
                                .position(parent, direction, dimensions, distance);
                        evaluated += 1;

                        let room = Room::new(
                            graph_room.id(),
                            graph_room.room_type(),
                            graph_room.children().to_vec(),
                            dimensions,
                            position,
                        );

                        if self.oracle.is_placeable(&room, existing) {
                            debug!(
                                room:% = room.id(),
                                candidates = evaluated,
                                x = position.x,
                                y = position.y,
                                width = dimensions.width,
                                height = dimensions.height;
                                "Room placed"
                            );
                            return Ok(Placement {
                                room,
                                candidates: evaluated,
                            });
                        }
                    }
                }

                trace!(
                    room:% = graph_room.id(),
                    width = dimensions.width,
                    height = dimensions.height,
                    candidates = evaluated;
                    "Dimensions rejected"
                );
            }
        }

        warn!(room:% = graph_room.id(), candidates = evaluated; "Search budget exhausted");
        Err(PlacementFailure::new(graph_room.id(), evaluated))
    }
}
