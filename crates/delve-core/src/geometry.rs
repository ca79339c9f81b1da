//! Integer grid geometry used by room placement.
//!
//! All coordinates are grid units. A room occupies the half-open rectangle
//! `[x, x + width) × [y, y + height)`, with `y` growing downwards.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A point on the dungeon grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns a new position moved by the given offset
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Width and height of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the rectangle these dimensions cover when anchored at `position`
    pub fn at(self, position: Position) -> Rect {
        Rect::new(position, self)
    }
}

/// Unit vector pointing from a parent room towards its child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    /// Children are stacked below their parent.
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };

    pub fn dx(self) -> i32 {
        self.dx
    }

    pub fn dy(self) -> i32 {
        self.dy
    }
}

/// Axis-aligned rectangle with inclusive minimum and exclusive maximum edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Rect {
    /// Creates the rectangle covered by `dimensions` with its top-left corner at `position`
    pub fn new(position: Position, dimensions: Dimensions) -> Self {
        Self {
            min_x: position.x,
            min_y: position.y,
            max_x: position.x.saturating_add(dimensions.width),
            max_y: position.y.saturating_add(dimensions.height),
        }
    }

    pub fn min_x(self) -> i32 {
        self.min_x
    }

    pub fn min_y(self) -> i32 {
        self.min_y
    }

    pub fn max_x(self) -> i32 {
        self.max_x
    }

    pub fn max_y(self) -> i32 {
        self.max_y
    }

    /// Grows the rectangle by `margin` on every side, clamped to the `i32` range
    pub fn inflate(self, margin: i32) -> Self {
        Self {
            min_x: self.min_x.saturating_sub(margin),
            min_y: self.min_y.saturating_sub(margin),
            max_x: self.max_x.saturating_add(margin),
            max_y: self.max_y.saturating_add(margin),
        }
    }

    /// Returns true if the two rectangles share any interior area.
    ///
    /// Rectangles that only touch along an edge or corner do not intersect.
    pub fn intersects(self, other: Rect) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Returns true if `other` lies entirely inside this rectangle
    pub fn contains(self, other: Rect) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

/// Inclusive integer range a random value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if `min > max`
    pub fn is_empty(self) -> bool {
        self.min > self.max
    }

    pub fn contains(self, value: i32) -> bool {
        RangeInclusive::from(self).contains(&value)
    }
}

impl From<IntRange> for RangeInclusive<i32> {
    fn from(range: IntRange) -> Self {
        range.min..=range.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Dimensions::new(w, h).at(Position::new(x, y))
    }

    #[test]
    fn test_position_translate() {
        let moved = Position::new(-3, 4).translate(3, -1);
        assert_eq!(moved, Position::new(0, 3));
    }

    #[test]
    fn test_rect_edges() {
        let r = rect(2, 3, 5, 7);
        assert_eq!(r.min_x(), 2);
        assert_eq!(r.min_y(), 3);
        assert_eq!(r.max_x(), 7);
        assert_eq!(r.max_y(), 10);
    }

    #[test]
    fn test_intersects_overlapping() {
        assert!(rect(0, 0, 10, 10).intersects(rect(5, 5, 10, 10)));
        assert!(rect(5, 5, 10, 10).intersects(rect(0, 0, 10, 10)));
        assert!(rect(0, 0, 10, 10).intersects(rect(2, 2, 2, 2)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        assert!(!rect(0, 0, 5, 5).intersects(rect(5, 0, 5, 5)));
        assert!(!rect(0, 0, 5, 5).intersects(rect(0, 5, 5, 5)));
        assert!(!rect(0, 0, 5, 5).intersects(rect(5, 5, 5, 5)));
    }

    #[test]
    fn test_disjoint() {
        assert!(!rect(0, 0, 5, 5).intersects(rect(0, 8, 5, 5)));
        assert!(!rect(0, 0, 5, 5).intersects(rect(-10, -10, 3, 3)));
    }

    #[test]
    fn test_inflate_makes_neighbours_collide() {
        let a = rect(0, 0, 5, 5);
        let b = rect(0, 7, 5, 5);
        assert!(!a.intersects(b));
        assert!(!a.inflate(2).intersects(b));
        assert!(a.inflate(3).intersects(b));
    }

    #[test]
    fn test_contains() {
        let world = rect(0, 0, 100, 100);
        assert!(world.contains(rect(0, 0, 100, 100)));
        assert!(world.contains(rect(10, 10, 5, 5)));
        assert!(!world.contains(rect(-1, 10, 5, 5)));
        assert!(!world.contains(rect(96, 10, 5, 5)));
    }

    #[test]
    fn test_inflate_saturates() {
        let grown = rect(0, i32::MAX - 20, 10, 10).inflate(i32::MAX);
        assert_eq!(grown.min_x(), -i32::MAX);
        assert_eq!(grown.max_x(), i32::MAX);
        assert_eq!(grown.max_y(), i32::MAX);
        assert!(grown.intersects(rect(5, 5, 1, 1)));
    }

    #[test]
    fn test_int_range() {
        let range = IntRange::new(2, 4);
        assert!(!range.is_empty());
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(IntRange::new(3, 2).is_empty());
        assert_eq!(RangeInclusive::from(range), 2..=4);
    }

    #[test]
    fn test_direction_down() {
        assert_eq!(Direction::DOWN.dx(), 0);
        assert_eq!(Direction::DOWN.dy(), 1);
    }
}
