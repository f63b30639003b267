//! HYG star catalog preparation for the 3D star map.
//!
//! Converts rows of the HYG database into the star records the front end
//! renders. The pipeline is strictly sequential:
//!
//! catalog load → name resolution → row filter → frame remap → assembly → JSON
//!
//! The `analysis` module summarizes an already written star file.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod frame;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod record;

pub use analysis::{AnalysisError, StarSummary};
pub use catalog::{load_catalog, read_catalog, CatalogError, CatalogRow};
pub use config::PipelineConfig;
pub use frame::{CatalogPosition, RendererPosition};
pub use naming::display_name;
pub use output::{Encoding, OutputError};
pub use pipeline::{PipelineError, PipelineSummary};
pub use record::StarRecord;
