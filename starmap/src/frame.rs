//! Catalog and renderer coordinate frames
//!
//! The HYG catalog uses the equatorial right-handed frame: X toward the
//! vernal equinox, Y toward 90° east, Z toward the north celestial pole.
//! The renderer is Y-up. Converting between the two is a rotation about X:
//!
//! ```text
//! x' =  x
//! y' =  z
//! z' = -y
//! ```
//!
//! Swapping Y and Z alone would mirror the scene; the sign flip on the new Z
//! keeps the frame right-handed. The two positions are distinct types so a
//! record can only be assembled from a remapped position.

use serde::{Deserialize, Serialize};

/// Cartesian position in the catalog frame, parsecs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Cartesian position in the renderer frame, parsecs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RendererPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CatalogPosition {
    /// Create a catalog-frame position from its components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate into the renderer's Y-up frame
    pub fn to_renderer(self) -> RendererPosition {
        RendererPosition {
            x: self.x,
            y: self.z,
            z: -self.y,
        }
    }
}

impl From<CatalogPosition> for RendererPosition {
    fn from(position: CatalogPosition) -> Self {
        position.to_renderer()
    }
}

impl RendererPosition {
    /// The solar system barycenter, where the synthetic Sun sits
    pub const ORIGIN: RendererPosition = RendererPosition {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}
