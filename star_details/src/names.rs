//! Proper names found in a star file

use std::collections::BTreeSet;
use std::path::Path;

use starmap::output::{self, OutputError};
use starmap::StarRecord;

/// Side-table keys for every star carrying a proper name.
///
/// Names are trimmed and lowercased; blank names are skipped.
pub fn proper_names(stars: &[StarRecord]) -> BTreeSet<String> {
    stars
        .iter()
        .filter_map(|star| star.proper.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Read the star file at `path` and collect its proper names
pub fn load_proper_names(path: &Path) -> Result<BTreeSet<String>, OutputError> {
    let stars = output::load_records(path)?;
    let names = proper_names(&stars);
    log::debug!(
        "Found {} proper names among {} stars in '{}'",
        names.len(),
        stars.len(),
        path.display()
    );
    Ok(names)
}
