//! Room placement pipeline.
//!
//! Generation runs in two stages:
//!
//! ```text
//! GraphDungeon
//!     ↓ walker (pre-order, one placer call per room)
//! Placed rooms, parent-relative coordinates
//!     ↓ normalize
//! Placed rooms, non-negative coordinates
//! ```
//!
//! - [`candidate`] - Random values for each axis of the search
//! - [`placer`] - Bounded search placing a single room
//! - [`walker`] - Traversal threading the placed rooms through the graph
//! - [`normalize`](mod@normalize) - Final translation pass

pub mod candidate;
pub mod normalize;
pub mod placer;
pub mod walker;

pub use candidate::CandidateGenerator;
pub use normalize::normalize;
pub use placer::{Placement, RoomPlacer};
pub use walker::{GenerationStats, TreeWalker};
