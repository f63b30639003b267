//! Star records written for the front end

use serde::{Deserialize, Serialize};

use crate::filter::PlaceableRow;
use crate::frame::RendererPosition;

/// Canonical values for the synthetic Sun
pub const SUN_NAME: &str = "Sol";
/// 1 AU in parsecs
pub const SUN_DISTANCE_PC: f64 = 0.0000048481;
pub const SUN_MAGNITUDE: f64 = -26.74;
pub const SUN_COLOR_INDEX: f64 = 0.656;
pub const SUN_SPECTRAL_TYPE: &str = "G2V";

/// One star as consumed by the renderer.
///
/// Optional values always serialize as `null`, never as a missing key, so
/// every record has the same schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub name: String,
    pub proper: Option<String>,
    /// Distance in parsecs
    pub dist: f64,
    /// Apparent visual magnitude
    pub mag: f64,
    pub spect: Option<String>,
    /// B-V color index
    pub ci: f64,
    #[serde(flatten)]
    pub position: RendererPosition,
}

impl StarRecord {
    /// The Sun as the renderer expects it, at the origin
    pub fn sun() -> Self {
        Self {
            name: SUN_NAME.to_string(),
            proper: Some(SUN_NAME.to_string()),
            dist: SUN_DISTANCE_PC,
            mag: SUN_MAGNITUDE,
            spect: Some(SUN_SPECTRAL_TYPE.to_string()),
            ci: SUN_COLOR_INDEX,
            position: RendererPosition::ORIGIN,
        }
    }

    /// Whether this record is the synthetic Sun
    pub fn is_sun(&self) -> bool {
        self.proper.as_deref() == Some(SUN_NAME)
    }
}

impl From<PlaceableRow<RendererPosition>> for StarRecord {
    fn from(row: PlaceableRow<RendererPosition>) -> Self {
        Self {
            name: row.name,
            proper: row.proper,
            dist: row.dist,
            mag: row.mag,
            spect: row.spect,
            ci: row.ci,
            position: row.position,
        }
    }
}

/// Build the output list: the synthetic Sun followed by every remapped row
pub fn assemble(rows: Vec<PlaceableRow<RendererPosition>>) -> Vec<StarRecord> {
    let mut records = Vec::with_capacity(rows.len() + 1);
    records.push(StarRecord::sun());
    records.extend(rows.into_iter().map(StarRecord::from));
    records
}
