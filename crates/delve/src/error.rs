//! Error types for Delve operations.
//!
//! This module provides the main error type [`DelveError`] which wraps the
//! conditions that abort dungeon generation.

use thiserror::Error;

use delve_core::{graph::GraphError, identifier::RoomId};

/// A room exhausted its whole search budget without an accepted candidate.
///
/// This does not distinguish a geometrically impossible room from an
/// unlucky random search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not place room \"{room}\" after {candidates} candidates")]
pub struct PlacementFailure {
    room: RoomId,
    candidates: u64,
}

impl PlacementFailure {
    pub fn new(room: RoomId, candidates: u64) -> Self {
        Self { room, candidates }
    }

    /// Returns the identifier of the room that could not be placed.
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Returns how many candidates were rejected.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }
}

/// The main error type for Delve operations.
#[derive(Debug, Error)]
pub enum DelveError {
    #[error(transparent)]
    Placement(#[from] PlacementFailure),

    #[error("Invalid dungeon graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DelveError {
    /// Returns the room that failed placement, if this is a placement error.
    pub fn failed_room(&self) -> Option<RoomId> {
        match self {
            Self::Placement(failure) => Some(failure.room()),
            _ => None,
        }
    }
}
