//! Translation making every room coordinate non-negative.

use log::debug;

use delve_core::room::Room;

/// Shifts all rooms so the smallest x and y coordinates are at least zero.
///
/// The offset is `(|min(0, min x)|, |min(0, min y)|)`, so layouts that are
/// already non-negative are returned untouched. Order and count are kept,
/// and applying it twice gives the same result as applying it once.
pub fn normalize(mut rooms: Vec<Room>) -> Vec<Room> {
    let (min_x, min_y) = rooms.iter().fold((0, 0), |(min_x, min_y), room| {
        let position = room.position();
        (min_x.min(position.x), min_y.min(position.y))
    });

    if min_x < 0 || min_y < 0 {
        let (dx, dy) = (min_x.saturating_abs(), min_y.saturating_abs());
        debug!(dx, dy; "Normalizing room positions");
        for room in &mut rooms {
            room.translate(dx, dy);
        }
    }

    rooms
}
