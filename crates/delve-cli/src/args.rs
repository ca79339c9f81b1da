//! Command-line argument definitions for the Delve CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the random seed and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Delve dungeon generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input dungeon graph (JSON)
    #[arg(help = "Path to the input dungeon graph")]
    pub input: String,

    /// Path to the output rooms file (JSON)
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed overriding the configured one
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["delve", "dungeon.json"]);

        assert_eq!(args.input, "dungeon.json");
        assert_eq!(args.output, "out.json");
        assert_eq!(args.config, None);
        assert_eq!(args.seed, None);
        assert!(!args.pretty);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "delve",
            "dungeon.json",
            "-o",
            "rooms.json",
            "-c",
            "delve.toml",
            "--seed",
            "42",
            "--pretty",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "rooms.json");
        assert_eq!(args.config.as_deref(), Some("delve.toml"));
        assert_eq!(args.seed, Some(42));
        assert!(args.pretty);
        assert_eq!(args.log_level, "debug");
    }
}
