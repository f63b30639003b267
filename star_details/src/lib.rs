//! Maintenance of the named-star description side-table.
//!
//! The front end shows a description for stars with a proper name, read from
//! `star_details.js`. This crate keeps that file in step with `stars.json` by
//! inserting a placeholder entry for every new name, and exposes the table
//! API an external content source uses to fill descriptions in.

pub mod maintain;
pub mod names;
pub mod table;

pub use maintain::{update_details, UpdateError, UpdateOutcome};
pub use names::{load_proper_names, proper_names};
pub use table::{DetailTable, DetailsError, StarDetail, PLACEHOLDER_TEXT};

/// Default location of the side-table script
pub const DEFAULT_DETAILS_PATH: &str = "star_details.js";
