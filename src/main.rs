//! # Extract Amplicon
//!
//! Extracts mapped reads within the coordinates of one amplicon and
//! trims them to it. All business logic is in the library.
use clap::Parser;
use extract_amplicon_core::commands;
use std::io;

/// Sets up logging and hands over to `commands::run`, which the
/// integration tests call directly with their own output handle.
fn main() {
    let cli = commands::Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    match commands::run(cli, io::stdout()) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error during execution: {e}");
            std::process::exit(1);
        }
    }
}
