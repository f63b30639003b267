//! Row filtering
//!
//! Keeps only rows the renderer can place and display. A row survives when
//! `dist`, `mag`, `ci`, `x`, `y` and `z` are all present and finite, and it is
//! not the catalog's own Sun (the pipeline injects a canonical one). Values
//! are not range-checked: odd magnitudes or sentinel distances pass through.

use crate::frame::{CatalogPosition, RendererPosition};
use crate::naming::NamedRow;

/// Proper name of the Sun in the HYG catalog
pub const NATIVE_SUN_NAME: &str = "Sol";

/// A named row carrying every value needed for placement.
///
/// `P` is the frame of `position`; filtering produces catalog-frame rows and
/// [`PlaceableRow::remap`] turns them into renderer-frame rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceableRow<P = CatalogPosition> {
    pub name: String,
    pub proper: Option<String>,
    pub spect: Option<String>,
    pub dist: f64,
    pub mag: f64,
    pub ci: f64,
    pub position: P,
}

/// Why a row was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A required placement value is absent
    MissingField(&'static str),
    /// The catalog's own Sun record
    NativeSun,
}

/// Rows kept by [`filter_rows`] plus counts of what was dropped
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub kept: Vec<PlaceableRow>,
    pub missing_fields: usize,
    pub native_sun: usize,
}

impl TryFrom<NamedRow> for PlaceableRow {
    type Error = Rejection;

    fn try_from(named: NamedRow) -> Result<Self, Self::Error> {
        let NamedRow { name, row } = named;

        let required = |value: Option<f64>, field: &'static str| {
            value
                .filter(|v| v.is_finite())
                .ok_or(Rejection::MissingField(field))
        };
        let dist = required(row.dist, "dist")?;
        let mag = required(row.mag, "mag")?;
        let ci = required(row.ci, "ci")?;
        let x = required(row.x, "x")?;
        let y = required(row.y, "y")?;
        let z = required(row.z, "z")?;

        if row.proper.as_deref() == Some(NATIVE_SUN_NAME) {
            return Err(Rejection::NativeSun);
        }

        Ok(Self {
            name,
            proper: row.proper,
            spect: row.spect,
            dist,
            mag,
            ci,
            position: CatalogPosition::new(x, y, z),
        })
    }
}

impl PlaceableRow<CatalogPosition> {
    /// Move the row into the renderer frame
    pub fn remap(self) -> PlaceableRow<RendererPosition> {
        PlaceableRow {
            name: self.name,
            proper: self.proper,
            spect: self.spect,
            dist: self.dist,
            mag: self.mag,
            ci: self.ci,
            position: self.position.to_renderer(),
        }
    }
}

/// Split named rows into placeable rows and rejections
pub fn filter_rows(rows: Vec<NamedRow>) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for named in rows {
        let id = named.row.id;
        let placed: Result<PlaceableRow, Rejection> = named.try_into();
        match placed {
            Ok(row) => outcome.kept.push(row),
            Err(Rejection::MissingField(field)) => {
                log::trace!("Dropping HYG {id}: missing {field}");
                outcome.missing_fields += 1;
            }
            Err(Rejection::NativeSun) => {
                log::debug!("Dropping catalog Sun (HYG {id})");
                outcome.native_sun += 1;
            }
        }
    }

    outcome
}
