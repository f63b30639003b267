//! Adds placeholder entries to `star_details.js` for every named star in
//! `stars.json`.
//!
//! Usage:
//!   update_details [--stars stars.json] [--details star_details.js] [--force]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use star_details::{update_details, DetailTable, UpdateOutcome, DEFAULT_DETAILS_PATH};
use starmap::config::DEFAULT_OUTPUT_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "update_details",
    about = "Keeps the star description side-table in step with the star file"
)]
struct Args {
    /// Star file written by process_hyg
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    stars: PathBuf,

    /// Side-table script to update
    #[arg(long, default_value = DEFAULT_DETAILS_PATH)]
    details: PathBuf,

    /// Delete the side-table first and rebuild it from scratch
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let details_name = args.details.display();

    if args.force && DetailTable::remove_file(&args.details)? {
        println!(
            "Force flag detected. Deleted existing '{details_name}' to perform a clean rebuild."
        );
    }

    let outcome = update_details(&args.stars, &args.details)
        .with_context(|| format!("Failed to update '{details_name}'"))?;

    match outcome {
        UpdateOutcome::NoNames => println!("No proper names found in star data. Aborting."),
        UpdateOutcome::UpToDate => {
            println!("{details_name} is already up to date. No changes made.")
        }
        UpdateOutcome::Added(count) => println!(
            "Successfully updated {details_name} with {count} new placeholder entries."
        ),
    }

    Ok(())
}
