//! Example: Generating a dungeon layout from a room graph
//!
//! This example builds a small graph programmatically, places its rooms
//! with a fixed seed and prints the resulting rectangles.

use delve::{
    DungeonGenerator,
    config::{GeneratorConfig, WorldConfig},
    graph::GraphDungeon,
    room::RoomType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building dungeon graph...\n");

    // Rooms hang below their parent, so a corridor-like chain always fits
    let mut dungeon = GraphDungeon::with_root(RoomType::Start);
    dungeon
        .add_child("start", "guard_room", RoomType::Room)?
        .add_child("guard_room", "armory", RoomType::Room)?
        .add_child("armory", "end", RoomType::End)?;

    let config = GeneratorConfig::default()
        .with_seed(Some(2024))
        .with_world(WorldConfig::new(64, 64));
    let generator = DungeonGenerator::new(config);

    let rooms = generator.generate(&dungeon)?;

    for room in &rooms {
        let position = room.position();
        let dimensions = room.dimensions();
        println!(
            "{:<12} {:<6} at ({:>3}, {:>3}) size {:>2}x{:<2}",
            room.id().to_string(),
            room.room_type().to_string(),
            position.x,
            position.y,
            dimensions.width,
            dimensions.height,
        );
    }

    println!("\n✅ Placed {} rooms", rooms.len());

    Ok(())
}
