//! stockctl (stock) - CLI for stockroom custom ID formats
//!
//! Works offline on format files in the persisted JSON shape: an array of
//! `{ elementType, config, sortOrder }` records.

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}
