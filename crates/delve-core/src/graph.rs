//! Abstract dungeon graphs.
//!
//! A [`GraphDungeon`] describes which rooms exist, what type each one is and
//! how they hang off each other, before any geometry is assigned. It is the
//! input of the placement search.
//!
//! The JSON form mirrors the data model directly:
//!
//! ```json
//! {
//!   "rooms": {
//!     "start": { "id": "start", "type": "start", "children": ["end"] },
//!     "end": { "id": "end", "type": "end", "parent": "start", "children": [] }
//!   }
//! }
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{identifier::RoomId, room::RoomType};

/// Identifier of the room every dungeon starts from.
pub const ROOT_ROOM_ID: &str = "start";

/// Structural problems that make a graph unusable for placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("dungeon has no root room \"start\"")]
    MissingRoot,

    #[error("root room \"start\" must not have a parent, found \"{0}\"")]
    RootHasParent(RoomId),

    #[error("room \"{0}\" has no parent but is not the root room")]
    MultipleRoots(RoomId),

    #[error("room stored under key \"{key}\" is identified as \"{id}\"")]
    KeyMismatch { key: RoomId, id: RoomId },

    #[error("room \"{room}\" refers to unknown parent \"{parent}\"")]
    UnknownParent { room: RoomId, parent: RoomId },

    #[error("room \"{room}\" refers to unknown child \"{child}\"")]
    UnknownChild { room: RoomId, child: RoomId },

    #[error("room \"{room}\" lists \"{child}\" as a child, but its parent is {}", display_parent(.declared))]
    ParentMismatch {
        room: RoomId,
        child: RoomId,
        declared: Option<RoomId>,
    },

    #[error("room \"{room}\" lists child \"{child}\" more than once")]
    DuplicateChild { room: RoomId, child: RoomId },

    #[error("room \"{0}\" is part of a parent cycle")]
    Cycle(RoomId),

    #[error("room \"{0}\" is not reachable from the root room")]
    Unreachable(RoomId),
}

fn display_parent(parent: &Option<RoomId>) -> String {
    match parent {
        Some(parent) => format!("\"{parent}\""),
        None => "missing".to_string(),
    }
}

/// A room in the abstract dungeon graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRoom {
    id: RoomId,
    #[serde(rename = "type")]
    room_type: RoomType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<RoomId>,
    #[serde(default)]
    children: Vec<RoomId>,
}

impl GraphRoom {
    /// Creates a room without parent or children.
    pub fn new(id: impl Into<RoomId>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            room_type,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Sets the parent of this room (builder style).
    pub fn with_parent(mut self, parent: impl Into<RoomId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Appends children to this room (builder style).
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RoomId>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn parent(&self) -> Option<RoomId> {
        self.parent
    }

    pub fn children(&self) -> &[RoomId] {
        &self.children
    }
}

/// The full input tree, keyed by room identifier in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDungeon {
    rooms: IndexMap<RoomId, GraphRoom>,
}

impl GraphDungeon {
    /// Creates an empty dungeon graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dungeon graph containing only the root room.
    pub fn with_root(room_type: RoomType) -> Self {
        let mut dungeon = Self::new();
        dungeon.insert(GraphRoom::new(RoomId::root(), room_type));
        dungeon
    }

    /// Inserts a room as-is, replacing any room stored under the same id.
    pub fn insert(&mut self, room: GraphRoom) -> Option<GraphRoom> {
        self.rooms.insert(room.id, room)
    }

    /// Adds a new room below `parent`, keeping both sides of the relation in sync.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownParent`] if `parent` is not in the graph.
    pub fn add_child(
        &mut self,
        parent: impl Into<RoomId>,
        id: impl Into<RoomId>,
        room_type: RoomType,
    ) -> Result<&mut Self, GraphError> {
        let parent = parent.into();
        let id = id.into();

        let parent_room = self
            .rooms
            .get_mut(&parent)
            .ok_or(GraphError::UnknownParent { room: id, parent })?;
        parent_room.children.push(id);

        self.insert(GraphRoom::new(id, room_type).with_parent(parent));
        Ok(self)
    }

    /// Returns the room with the given identifier.
    pub fn room(&self, id: RoomId) -> Option<&GraphRoom> {
        self.rooms.get(&id)
    }

    /// Returns the root room, if present.
    pub fn root(&self) -> Option<&GraphRoom> {
        self.room(RoomId::root())
    }

    /// Iterates over the rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &GraphRoom> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Checks that the graph is a single tree rooted at [`ROOT_ROOM_ID`].
    ///
    /// Parent references and child lists must agree with each other and
    /// every room must be reachable from the root exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] found, checking rooms in
    /// declaration order.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (key, room) in &self.rooms {
            if *key != room.id {
                return Err(GraphError::KeyMismatch {
                    key: *key,
                    id: room.id,
                });
            }
        }

        let root = self.root().ok_or(GraphError::MissingRoot)?;
        if let Some(parent) = root.parent {
            return Err(GraphError::RootHasParent(parent));
        }

        for room in self.rooms() {
            match room.parent {
                None if room.id != root.id => return Err(GraphError::MultipleRoots(room.id)),
                Some(parent) if !self.rooms.contains_key(&parent) => {
                    return Err(GraphError::UnknownParent {
                        room: room.id,
                        parent,
                    });
                }
                _ => {}
            }

            for &child in &room.children {
                let child_room = self.room(child).ok_or(GraphError::UnknownChild {
                    room: room.id,
                    child,
                })?;
                if child_room.parent != Some(room.id) {
                    return Err(GraphError::ParentMismatch {
                        room: room.id,
                        child,
                        declared: child_room.parent,
                    });
                }
            }
        }

        let reachable = self.reachable_from_root(root)?;
        if let Some(orphan) = self.rooms().find(|room| !reachable.contains(&room.id)) {
            return Err(if self.has_parent_cycle(orphan.id) {
                GraphError::Cycle(orphan.id)
            } else {
                GraphError::Unreachable(orphan.id)
            });
        }

        trace!(rooms = self.len(); "Dungeon graph validated");
        Ok(())
    }

    /// Collects every room reachable from the root through child lists.
    fn reachable_from_root(&self, root: &GraphRoom) -> Result<HashSet<RoomId>, GraphError> {
        let mut visited = HashSet::with_capacity(self.len());
        visited.insert(root.id);

        let mut stack = vec![root];
        while let Some(room) = stack.pop() {
            for &child in &room.children {
                if !visited.insert(child) {
                    return Err(GraphError::DuplicateChild {
                        room: room.id,
                        child,
                    });
                }
                if let Some(child_room) = self.room(child) {
                    stack.push(child_room);
                }
            }
        }

        Ok(visited)
    }

    /// Returns true if following parent references from `id` loops back on itself.
    fn has_parent_cycle(&self, id: RoomId) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(id);
        while let Some(room_id) = current {
            if !seen.insert(room_id) {
                return true;
            }
            current = self.room(room_id).and_then(|room| room.parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_dungeon() -> GraphDungeon {
        let mut dungeon = GraphDungeon::with_root(RoomType::Start);
        dungeon
            .add_child("start", "hall", RoomType::Room)
            .unwrap()
            .add_child("hall", "end", RoomType::End)
            .unwrap();
        dungeon
    }

    #[test]
    fn test_add_child_links_both_sides() {
        let dungeon = linear_dungeon();

        let start = dungeon.root().unwrap();
        assert_eq!(start.children(), &[RoomId::new("hall")]);

        let hall = dungeon.room(RoomId::new("hall")).unwrap();
        assert_eq!(hall.parent(), Some(RoomId::new("start")));
        assert_eq!(hall.children(), &[RoomId::new("end")]);
        assert_eq!(dungeon.len(), 3);
        assert!(dungeon.validate().is_ok());
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut dungeon = GraphDungeon::with_root(RoomType::Start);
        let err = dungeon.add_child("nowhere", "x", RoomType::Room).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownParent {
                room: RoomId::new("x"),
                parent: RoomId::new("nowhere"),
            }
        );
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{
            "rooms": {
                "start": { "id": "start", "type": "start", "children": ["a", "end"] },
                "a": { "id": "a", "type": "room", "parent": "start", "children": [] },
                "end": { "id": "end", "type": "end", "parent": "start" }
            }
        }"#;

        let dungeon: GraphDungeon = serde_json::from_str(json).unwrap();
        assert_eq!(dungeon.len(), 3);
        let ids: Vec<String> = dungeon.rooms().map(|room| room.id().to_string()).collect();
        assert_eq!(ids, ["start", "a", "end"]);
        assert!(dungeon.room(RoomId::new("end")).unwrap().children().is_empty());
        assert!(dungeon.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let mut dungeon = GraphDungeon::new();
        dungeon.insert(GraphRoom::new("entrance", RoomType::Start));
        assert_eq!(dungeon.validate(), Err(GraphError::MissingRoot));
    }

    #[test]
    fn test_validate_root_with_parent() {
        let mut dungeon = GraphDungeon::new();
        dungeon.insert(GraphRoom::new("start", RoomType::Start).with_parent("elsewhere"));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::RootHasParent(RoomId::new("elsewhere")))
        );
    }

    #[test]
    fn test_validate_multiple_roots() {
        let mut dungeon = linear_dungeon();
        dungeon.insert(GraphRoom::new("island", RoomType::Room));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::MultipleRoots(RoomId::new("island")))
        );
    }

    #[test]
    fn test_validate_key_mismatch() {
        let json = r#"{ "rooms": { "start": { "id": "begin", "type": "start" } } }"#;
        let dungeon: GraphDungeon = serde_json::from_str(json).unwrap();
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::KeyMismatch {
                key: RoomId::new("start"),
                id: RoomId::new("begin"),
            })
        );
    }

    #[test]
    fn test_validate_dangling_references() {
        let mut dungeon = GraphDungeon::new();
        dungeon.insert(GraphRoom::new("start", RoomType::Start).with_children(["ghost"]));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::UnknownChild {
                room: RoomId::new("start"),
                child: RoomId::new("ghost"),
            })
        );

        let mut dungeon = GraphDungeon::with_root(RoomType::Start);
        dungeon.insert(GraphRoom::new("lost", RoomType::End).with_parent("void"));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::UnknownParent {
                room: RoomId::new("lost"),
                parent: RoomId::new("void"),
            })
        );
    }

    #[test]
    fn test_validate_parent_mismatch() {
        let mut dungeon = linear_dungeon();
        dungeon.insert(
            GraphRoom::new("start", RoomType::Start).with_children(["hall", "end"]),
        );
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::ParentMismatch {
                room: RoomId::new("start"),
                child: RoomId::new("end"),
                declared: Some(RoomId::new("hall")),
            })
        );
    }

    #[test]
    fn test_validate_duplicate_child() {
        let mut dungeon = GraphDungeon::new();
        dungeon.insert(GraphRoom::new("start", RoomType::Start).with_children(["end", "end"]));
        dungeon.insert(GraphRoom::new("end", RoomType::End).with_parent("start"));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::DuplicateChild {
                room: RoomId::new("start"),
                child: RoomId::new("end"),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let mut dungeon = GraphDungeon::with_root(RoomType::Start);
        dungeon.insert(
            GraphRoom::new("a", RoomType::Room)
                .with_parent("b")
                .with_children(["b"]),
        );
        dungeon.insert(
            GraphRoom::new("b", RoomType::Room)
                .with_parent("a")
                .with_children(["a"]),
        );
        assert_eq!(dungeon.validate(), Err(GraphError::Cycle(RoomId::new("a"))));
    }

    #[test]
    fn test_validate_unreachable() {
        let mut dungeon = GraphDungeon::with_root(RoomType::Start);
        dungeon.insert(GraphRoom::new("hidden", RoomType::Room).with_parent("start"));
        assert_eq!(
            dungeon.validate(),
            Err(GraphError::Unreachable(RoomId::new("hidden")))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::ParentMismatch {
            room: RoomId::new("start"),
            child: RoomId::new("end"),
            declared: None,
        };
        assert_eq!(
            err.to_string(),
            "room \"start\" lists \"end\" as a child, but its parent is missing"
        );
        assert_eq!(
            GraphError::MissingRoot.to_string(),
            "dungeon has no root room \"start\""
        );
    }
}
