//! Room types and placed rooms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Dimensions, Position, Rect},
    identifier::RoomId,
};

/// Kind of a room, which decides the size range it is generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Start,
    Room,
    End,
}

impl RoomType {
    /// All room types, in declaration order.
    pub const ALL: [RoomType; 3] = [RoomType::Start, RoomType::Room, RoomType::End];
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomType::Start => "start",
            RoomType::Room => "room",
            RoomType::End => "end",
        })
    }
}

/// A room with concrete geometry.
///
/// Rooms are created by the placement search once a candidate geometry is
/// accepted. Afterwards only normalization moves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    #[serde(rename = "type")]
    room_type: RoomType,
    children: Vec<RoomId>,
    dimensions: Dimensions,
    position: Position,
}

impl Room {
    pub fn new(
        id: RoomId,
        room_type: RoomType,
        children: Vec<RoomId>,
        dimensions: Dimensions,
        position: Position,
    ) -> Self {
        Self {
            id,
            room_type,
            children,
            dimensions,
            position,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn children(&self) -> &[RoomId] {
        &self.children
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the rectangle the room occupies
    pub fn bounds(&self) -> Rect {
        self.dimensions.at(self.position)
    }

    /// Moves the room by the given offset.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.translate(dx, dy);
    }
}
