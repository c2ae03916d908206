//! Radar Gen - synthetic Brazilian license-plate detection dataset generator
//!
//! A CLI tool that synthesizes camera-detection records and exports them
//! as CSV. No real sensor, camera, or government data is involved.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
