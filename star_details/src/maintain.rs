//! Placeholder maintenance for the side-table

use std::path::Path;

use thiserror::Error;

use crate::names;
use crate::table::{DetailTable, DetailsError};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Stars(#[from] starmap::OutputError),

    #[error(transparent)]
    Details(#[from] DetailsError),
}

/// Result of one maintenance pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The star file holds no proper names; nothing was written
    NoNames,
    /// Every name already had an entry; nothing was written
    UpToDate,
    /// The side-table was rewritten with this many new placeholders
    Added(usize),
}

/// Make sure every proper name in `stars` has an entry in `details`.
///
/// The side-table is only rewritten when at least one placeholder was added.
pub fn update_details(stars: &Path, details: &Path) -> Result<UpdateOutcome, UpdateError> {
    let names = names::load_proper_names(stars)?;
    if names.is_empty() {
        return Ok(UpdateOutcome::NoNames);
    }

    let mut table = DetailTable::load(details)?;
    let added = table.add_placeholders(names);
    if added == 0 {
        return Ok(UpdateOutcome::UpToDate);
    }

    table.save(details)?;
    log::info!(
        "Side-table '{}' now holds {} entries ({} pending)",
        details.display(),
        table.len(),
        table.pending().count()
    );
    Ok(UpdateOutcome::Added(added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap::output::{save_records, Encoding};
    use starmap::{RendererPosition, StarRecord};
    use tempfile::TempDir;

    fn write_stars(dir: &TempDir, propers: &[Option<&str>]) -> std::path::PathBuf {
        let stars: Vec<StarRecord> = propers
            .iter()
            .enumerate()
            .map(|(i, proper)| StarRecord {
                name: format!("HYG {i}"),
                proper: proper.map(str::to_string),
                dist: 1.0,
                mag: 1.0,
                spect: None,
                ci: 0.0,
                position: RendererPosition::default(),
            })
            .collect();
        let path = dir.path().join("stars.json");
        save_records(&path, &stars, Encoding::Pretty).unwrap();
        path
    }

    #[test]
    fn test_no_names_leaves_side_table_alone() {
        let dir = tempfile::tempdir().unwrap();
        let stars = write_stars(&dir, &[None, Some(" ")]);
        let details = dir.path().join("star_details.js");

        assert_eq!(update_details(&stars, &details).unwrap(), UpdateOutcome::NoNames);
        assert!(!details.exists());
    }

    #[test]
    fn test_adds_then_reports_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let stars = write_stars(&dir, &[Some("Vega"), Some("Rigel"), None]);
        let details = dir.path().join("star_details.js");

        assert_eq!(update_details(&stars, &details).unwrap(), UpdateOutcome::Added(2));
        let written = std::fs::read_to_string(&details).unwrap();

        assert_eq!(update_details(&stars, &details).unwrap(), UpdateOutcome::UpToDate);
        assert_eq!(std::fs::read_to_string(&details).unwrap(), written);
    }

    #[test]
    fn test_missing_star_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = update_details(
            &dir.path().join("stars.json"),
            &dir.path().join("star_details.js"),
        );
        assert!(matches!(result, Err(UpdateError::Stars(_))));
    }
}
