//! Catalog fixtures for the star map test suites.
//!
//! Builds small HYG-shaped CSV tables so tests exercise the real loader
//! instead of hand-constructed rows. The header mirrors the column layout of
//! the published HYG v4.2 export, including the columns the pipeline ignores.
//!
//! # Usage
//! ```rust
//! use test_helpers::{CatalogFixture, FixtureRow};
//!
//! let fixture = CatalogFixture::new()
//!     .row(FixtureRow::new(1).proper("Sirius").photometry(2.64, -1.46, 0.009).position(1.0, 2.0, 3.0))
//!     .row(FixtureRow::new(2).bayer("Alp").con("And").photometry(10.0, 5.0, 0.5));
//!
//! let file = fixture.write().expect("Failed to write fixture");
//! assert!(file.path().exists());
//! ```

use std::io::Write;

use tempfile::NamedTempFile;

/// Column layout of the HYG v4.2 CSV export
pub const HYG_COLUMNS: [&str; 37] = [
    "id", "hip", "hd", "hr", "gl", "bf", "proper", "ra", "dec", "dist", "pmra", "pmdec", "rv",
    "mag", "absmag", "spect", "ci", "x", "y", "z", "vx", "vy", "vz", "rarad", "decrad", "pmrarad",
    "pmdecrad", "bayer", "flam", "con", "comp", "comp_primary", "base", "lum", "var", "var_min",
    "var_max",
];

/// Error types for fixture construction
#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    /// The temporary catalog file could not be created or written
    #[error("Failed to write catalog fixture: {0}")]
    Io(#[from] std::io::Error),
}

/// One catalog row; unset cells are written empty
#[derive(Debug, Clone, Default)]
pub struct FixtureRow {
    id: i64,
    cells: Vec<(&'static str, String)>,
}

impl FixtureRow {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            cells: Vec::new(),
        }
    }

    /// Set any column by name, overriding earlier values
    pub fn set(mut self, column: &'static str, value: impl ToString) -> Self {
        self.cells.retain(|(c, _)| *c != column);
        self.cells.push((column, value.to_string()));
        self
    }

    pub fn proper(self, value: &str) -> Self {
        self.set("proper", value)
    }

    pub fn bayer(self, value: &str) -> Self {
        self.set("bayer", value)
    }

    pub fn flam(self, value: &str) -> Self {
        self.set("flam", value)
    }

    pub fn con(self, value: &str) -> Self {
        self.set("con", value)
    }

    pub fn gl(self, value: &str) -> Self {
        self.set("gl", value)
    }

    pub fn hip(self, value: &str) -> Self {
        self.set("hip", value)
    }

    pub fn hd(self, value: &str) -> Self {
        self.set("hd", value)
    }

    pub fn spect(self, value: &str) -> Self {
        self.set("spect", value)
    }

    /// Distance (pc), apparent magnitude and color index
    pub fn photometry(self, dist: f64, mag: f64, ci: f64) -> Self {
        self.set("dist", dist).set("mag", mag).set("ci", ci)
    }

    /// Catalog-frame cartesian position (pc)
    pub fn position(self, x: f64, y: f64, z: f64) -> Self {
        self.set("x", x).set("y", y).set("z", z)
    }

    /// Clear a column so it is written empty
    pub fn without(mut self, column: &str) -> Self {
        self.cells.retain(|(c, _)| *c != column);
        self
    }

    fn cell(&self, column: &str) -> String {
        if column == "id" {
            return self.id.to_string();
        }
        self.cells
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| quote(v))
            .unwrap_or_default()
    }

    fn to_csv_line(&self) -> String {
        HYG_COLUMNS
            .iter()
            .map(|column| self.cell(column))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// An in-memory HYG table
#[derive(Debug, Clone, Default)]
pub struct CatalogFixture {
    rows: Vec<FixtureRow>,
}

impl CatalogFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: FixtureRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Render the table as CSV text, header included
    pub fn to_csv(&self) -> String {
        let mut text = HYG_COLUMNS.join(",");
        text.push('\n');
        for row in &self.rows {
            text.push_str(&row.to_csv_line());
            text.push('\n');
        }
        text
    }

    /// Write the table to a temporary `.csv` file removed on drop
    pub fn write(&self) -> Result<NamedTempFile, TestHelperError> {
        let mut file = tempfile::Builder::new()
            .prefix("hyg_fixture_")
            .suffix(".csv")
            .tempfile()?;
        file.write_all(self.to_csv().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

fn quote(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
