//! Star file encoding
//!
//! The star list is written as one JSON array. Two layouts are supported and
//! decode to the same records: `Pretty` (2-space indent, diff friendly) and
//! `Compact` (no whitespace, smallest download).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::record::StarRecord;

/// Errors that can occur reading or writing a star file
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not a valid star file: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON layout of the star file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Encoding {
    /// Indented with two spaces
    #[default]
    Pretty,
    /// Minimal separators, no whitespace
    Compact,
}

/// Encode records to any writer
pub fn write_records<W: Write>(
    writer: W,
    records: &[StarRecord],
    encoding: Encoding,
) -> serde_json::Result<()> {
    match encoding {
        Encoding::Pretty => serde_json::to_writer_pretty(writer, records),
        Encoding::Compact => serde_json::to_writer(writer, records),
    }
}

/// Encode records to a string
pub fn encode_records(records: &[StarRecord], encoding: Encoding) -> serde_json::Result<String> {
    match encoding {
        Encoding::Pretty => serde_json::to_string_pretty(records),
        Encoding::Compact => serde_json::to_string(records),
    }
}

/// Replace the file at `path` with the encoded records.
///
/// The file is truncated and rewritten in full; nothing is appended.
pub fn save_records(
    path: &Path,
    records: &[StarRecord],
    encoding: Encoding,
) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_error = |source: io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    write_records(&mut writer, records, encoding).map_err(|e| write_error(e.into()))?;
    writer.flush().map_err(write_error)?;

    log::debug!("Wrote {} records to '{}' ({encoding:?})", records.len(), path.display());
    Ok(())
}

/// Read a star file written by [`save_records`]
pub fn load_records(path: &Path) -> Result<Vec<StarRecord>, OutputError> {
    let text = std::fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| OutputError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
