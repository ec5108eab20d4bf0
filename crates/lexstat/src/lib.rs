//! # lexstat
//!
//! **CLI Binary**
//!
//! This is the entry point for the `lexstat` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Initialize logging
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod format;
mod logging;

use anyhow::Result;
use clap::Parser;
use lexstat_config::Cli;

pub use config::{resolve_format, resolve_profile, resolve_scan, resolve_store_path};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let user_config = config::load_config();
    let profile = resolve_profile(&user_config, cli.profile.as_ref());
    commands::dispatch(cli, profile)
}

/// Render an error with its full context chain and any hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
