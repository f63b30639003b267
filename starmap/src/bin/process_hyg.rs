//! Converts the HYG star catalog into the star map's `stars.json`.
//!
//! Reads the HYG CSV, names every star, drops rows the renderer cannot place,
//! rotates positions into the renderer's Y-up frame, prepends the Sun and
//! writes the result as a JSON array.
//!
//! Usage:
//!   process_hyg [--input hyg_v42.csv] [--output stars.json] [--encoding pretty|compact]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use starmap::catalog::CatalogError;
use starmap::config::{Encoding, PipelineConfig, DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH};
use starmap::pipeline::{self, PipelineError};

const DOWNLOAD_HINT: &str = "Download the HYG database from \
    https://github.com/astronexus/HYG-Database and place it next to this tool, \
    or point --input at it";

#[derive(Parser, Debug)]
#[command(
    name = "process_hyg",
    about = "Converts the HYG star catalog into the star map JSON",
    long_about = None
)]
struct Args {
    /// HYG catalog CSV to read
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    input: PathBuf,

    /// Star file to write (replaced on every run)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// JSON layout of the star file
    #[arg(long, value_enum, default_value_t = Encoding::Pretty)]
    encoding: Encoding,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = PipelineConfig::new(args.input, args.output).with_encoding(args.encoding);

    let summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(err @ PipelineError::Catalog(CatalogError::NotFound(_))) => {
            return Err(anyhow::Error::new(err).context(DOWNLOAD_HINT));
        }
        Err(err) => return Err(err.into()),
    };

    println!("Read {} catalog rows, kept {} stars.", summary.loaded, summary.kept);
    println!(
        "\nSuccess! Saved {} stars to '{}'.",
        summary.written,
        summary.output.display()
    );
    println!("You can now reload the web application.");

    Ok(())
}
