//! HYG catalog loading
//!
//! Reads the delimited HYG table into [`CatalogRow`]s. Only the fifteen
//! columns the star map needs are decoded; any other column in the source
//! file is ignored. Every optional value lands in an `Option` so later stages
//! can test presence uniformly instead of looking for sentinels.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Columns selected from the source table
pub const CATALOG_COLUMNS: [&str; 15] = [
    "id", "proper", "dist", "mag", "spect", "ci", "x", "y", "z", "bayer", "flam", "con", "gl",
    "hd", "hip",
];

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file '{0}' was not found")]
    NotFound(PathBuf),

    #[error("failed to open catalog '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog header is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("malformed catalog row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),
}

/// One object of the HYG catalog, restricted to the columns the map uses.
///
/// The six placement values (`dist`, `mag`, `ci`, `x`, `y`, `z`) are read
/// leniently: surrounding whitespace is ignored, and an empty or non-numeric
/// cell becomes `None` so the row is later dropped by the filter. Catalog identifiers stay textual until a
/// naming tier decides how to interpret them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogRow {
    /// Native HYG identifier
    pub id: i64,
    pub proper: Option<String>,
    /// Distance in parsecs
    #[serde(deserialize_with = "lenient_number")]
    pub dist: Option<f64>,
    /// Apparent visual magnitude
    #[serde(deserialize_with = "lenient_number")]
    pub mag: Option<f64>,
    pub spect: Option<String>,
    /// B-V color index
    #[serde(deserialize_with = "lenient_number")]
    pub ci: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub z: Option<f64>,
    pub bayer: Option<String>,
    pub flam: Option<String>,
    pub con: Option<String>,
    pub gl: Option<String>,
    pub hd: Option<String>,
    pub hip: Option<String>,
}

/// Decode a full catalog table from any reader.
///
/// The header must name every column in [`CATALOG_COLUMNS`]. A row whose
/// `id` cannot be decoded is fatal and reported with its line number.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = CATALOG_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::MissingColumns(missing));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(row_error))
        .collect()
}

/// Load the catalog at `path` into memory.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRow>, CatalogError> {
    log::info!("Reading star data from '{}'...", path.display());

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Open {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rows = read_catalog(file)?;
    log::info!("Successfully loaded {} stars from the database.", rows.len());
    Ok(rows)
}

/// Numeric cell that may be padded, empty or junk
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|cell| cell.trim().parse().ok()))
}

fn row_error(err: csv::Error) -> CatalogError {
    match err.kind() {
        csv::ErrorKind::Deserialize {
            pos: Some(pos),
            err: de,
        } => CatalogError::MalformedRow {
            line: pos.line(),
            reason: de.to_string(),
        },
        _ => CatalogError::Csv(err),
    }
}
