//! Delve CLI entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use delve_cli::{Args, CliError, error_adapter::to_reportable};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match delve_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Installs `env_logger`, falling back to `warn` for an unknown level name.
fn init_logger(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Delve");
}

fn report(err: &CliError) {
    let mut rendered = String::new();
    match GraphicalReportHandler::new().render_report(&mut rendered, &to_reportable(err)) {
        Ok(()) => error!("{rendered}"),
        // Fall back to the plain message if rendering fails
        Err(_) => error!("{err}"),
    }
}
