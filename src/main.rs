//! journey - a command-line journaling utility
//!
//! journey provides:
//! - One dated entry file per day, opened in the configured editor
//! - A tag index kept in sync with the journal directory by content hashing
//! - Tag search with next/previous navigation over the results

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;
mod flows;
mod index;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = cli::run(cli) {
        eprintln!("{} {}", "ERROR:".red().bold(), err);
        std::process::exit(1);
    }
}
