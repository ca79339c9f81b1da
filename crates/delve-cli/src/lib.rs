//! CLI logic for the Delve dungeon generator.
//!
//! Reads a dungeon graph from JSON, places its rooms and writes the placed
//! rooms back as a JSON array.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::{CliError, ConfigError};

use std::fs;

use log::info;

use delve::{DungeonGenerator, graph::GraphDungeon};

/// Run the Delve CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input JSON
/// - Graph, configuration or placement errors raised by the generator
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing dungeon"
    );

    let mut config = config::load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }

    let source = fs::read_to_string(&args.input)?;
    let dungeon: GraphDungeon = serde_json::from_str(&source)?;

    let rooms = DungeonGenerator::new(config).generate(&dungeon)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&rooms)?
    } else {
        serde_json::to_string(&rooms)?
    };
    fs::write(&args.output, json)?;

    info!(output_file = args.output, rooms = rooms.len(); "Rooms exported successfully");

    Ok(())
}
