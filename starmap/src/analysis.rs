//! Star file summary
//!
//! The front end clamps stars without a measured distance to the catalog's
//! maximum distance, so they end up on one shell around the viewer: the
//! "Garbage Sphere". Membership is strict equality with the largest distance
//! in the file; no other threshold is inferred.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Only the distance matters here; every other field is ignored
#[derive(Debug, Deserialize)]
struct DistanceOnly {
    #[serde(default)]
    dist: Option<f64>,
}

/// Counts reported by the analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSummary {
    /// Stars with a non-null distance
    pub total: usize,
    /// Stars sitting exactly at the maximum distance
    pub garbage_sphere: usize,
    /// Everything else
    pub measured: usize,
    /// Radius of the Garbage Sphere, parsecs
    pub max_distance: f64,
}

impl StarSummary {
    /// Summarize a sequence of distances, skipping missing ones.
    ///
    /// Returns `None` when no distance is present at all.
    pub fn from_distances<I>(distances: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let valid: Vec<f64> = distances.into_iter().flatten().collect();
        if valid.is_empty() {
            return None;
        }

        let max_distance = valid.iter().copied().fold(0.0, f64::max);
        let garbage_sphere = valid.iter().filter(|&&d| d == max_distance).count();

        Some(Self {
            total: valid.len(),
            garbage_sphere,
            measured: valid.len() - garbage_sphere,
            max_distance,
        })
    }

    /// Summarize the JSON text of a star file
    pub fn from_json(text: &str) -> Result<Option<Self>, AnalysisError> {
        let stars: Vec<DistanceOnly> = serde_json::from_str(text)?;
        Ok(Self::from_distances(stars.into_iter().map(|s| s.dist)))
    }

    /// Summarize the star file at `path`
    pub fn load(path: &Path) -> Result<Option<Self>, AnalysisError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl fmt::Display for StarSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total stars loaded: {}", self.total)?;
        writeln!(f, "Stars in 'Garbage Sphere': {}", self.garbage_sphere)?;
        writeln!(f, "Stars with measured distances: {}", self.measured)?;
        write!(f, "'Garbage Sphere' is at distance: {:?} pc", self.max_distance)
    }
}
