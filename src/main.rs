//! decor - post-build decorator for rendered blog pages.
//!
//! Runs once over a rendered Jekyll site, adding image credit labels,
//! heading permalinks, and gutter anchor icons to post content.

mod cli;
mod config;
mod decorate;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DecorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = DecorConfig::load(&cli)?;

    match &cli.command {
        Commands::Run { args } => cli::run::run_decorate(&config, args),
        Commands::Scan { args } => cli::scan::run_scan(&config, args),
    }
}
