//! End-to-end catalog processing
//!
//! [`process`] is the pure part of the pipeline and works on rows already in
//! memory. [`run`] adds the file boundaries: it loads the whole catalog before
//! transforming anything and rewrites the star file in one go.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{self, CatalogError, CatalogRow};
use crate::config::PipelineConfig;
use crate::filter::{self, FilterOutcome};
use crate::naming;
use crate::output::{self, OutputError};
use crate::record::{self, StarRecord};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a pipeline run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Rows read from the catalog
    pub loaded: usize,
    /// Catalog rows that made it into the output
    pub kept: usize,
    /// Records written, including the synthetic Sun
    pub written: usize,
    pub output: PathBuf,
}

/// Turn catalog rows into the star list, synthetic Sun first
pub fn process(rows: Vec<CatalogRow>) -> Vec<StarRecord> {
    let named = naming::resolve_names(rows);

    let FilterOutcome {
        kept,
        missing_fields,
        native_sun,
    } = filter::filter_rows(named);
    log::debug!("Dropped {missing_fields} rows with missing fields");
    if native_sun > 0 {
        log::debug!("Removed {native_sun} catalog Sun entries");
    }
    log::info!("Found {} stars with all required data fields (excluding Sol).", kept.len());

    let remapped = kept.into_iter().map(|row| row.remap()).collect();
    record::assemble(remapped)
}

/// Load, transform and write according to `config`
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary, PipelineError> {
    let rows = catalog::load_catalog(&config.input)?;
    let loaded = rows.len();

    let records = process(rows);
    output::save_records(&config.output, &records, config.encoding)?;
    log::info!("Saved {} stars to '{}'", records.len(), config.output.display());

    Ok(PipelineSummary {
        loaded,
        kept: records.len() - 1,
        written: records.len(),
        output: config.output.clone(),
    })
}
