//! Prints a short summary of a star file, including the size of the
//! "Garbage Sphere" (stars clamped to the catalog's maximum distance).
//!
//! Never fails: a missing, malformed or empty file is reported on stdout.

use std::path::PathBuf;

use clap::Parser;
use starmap::analysis::StarSummary;
use starmap::config::DEFAULT_OUTPUT_PATH;

#[derive(Parser, Debug)]
#[command(name = "star_stats", about = "Summarizes a star map JSON file")]
struct Args {
    /// Star file written by process_hyg
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    stars: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match StarSummary::load(&args.stars) {
        Ok(Some(summary)) => println!("{summary}"),
        Ok(None) => println!("No valid star data found."),
        Err(e) => println!("Error reading or parsing {}: {e}", args.stars.display()),
    }
}
