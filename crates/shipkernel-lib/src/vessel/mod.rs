//! Vessel data types and catalog management.
//!
//! - [`profile`] - Static vessel profiles and their physical limits
//! - [`catalog`] - Read-only catalog with default-profile fallback

pub mod catalog;
pub mod profile;

pub use catalog::{CatalogListing, VesselCatalog, VesselResolution};
pub use profile::VesselProfile;
