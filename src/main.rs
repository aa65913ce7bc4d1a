//! # action-manifest
//!
//! Command-line entry point: scans directories for controller action manifests
//! and validates them.
//!
//! ## Exit status
//! - 0: every manifest passed (or the command does not validate)
//! - 1: at least one manifest failed validation
//! - 2: setup error (bad root, bad glob, I/O)

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use action_manifest::core::config::Config;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    let config = Config::load();
    log::debug!("config: {:?}", config);

    match run::dispatch(&args, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
