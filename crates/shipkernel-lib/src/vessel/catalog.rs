//! Vessel catalog loading and lookup.
//!
//! The catalog is an explicitly constructed, read-only list of vessel
//! profiles. Lookup by IMO number never fails: an unmatched number resolves
//! to the catalog's first entry, with the substitution surfaced on the
//! returned [`VesselResolution`] so callers that care can detect it.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::profile::VesselProfile;

/// Read-only collection of vessel profiles.
///
/// Entry order is preserved from the source; the first entry acts as the
/// default profile for unmatched lookups.
#[derive(Debug, Clone)]
pub struct VesselCatalog {
    vessels: Vec<VesselProfile>,
    source: Option<PathBuf>,
}

/// Result of resolving an IMO number against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct VesselResolution<'a> {
    /// The matched profile, or the default profile when unmatched.
    pub profile: &'a VesselProfile,
    /// True when the requested IMO number was absent and the default
    /// profile was substituted.
    pub substituted: bool,
}

/// Catalog listing payload for the list-vessels operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListing {
    pub status: String,
    /// UTC timestamp of the listing, RFC 3339.
    pub timestamp: String,
    pub total_vessels: usize,
    pub vessels: Vec<VesselProfile>,
}

impl VesselCatalog {
    /// Build a catalog from an ordered list of profiles.
    ///
    /// Every profile is validated and IMO numbers must be unique. The list
    /// must be non-empty so a default profile exists.
    pub fn from_vessels(vessels: Vec<VesselProfile>) -> Result<Self> {
        if vessels.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        for vessel in &vessels {
            vessel.validate()?;
        }

        for (i, vessel) in vessels.iter().enumerate() {
            if vessels[..i].iter().any(|v| v.imo_number == vessel.imo_number) {
                return Err(Error::DuplicateImoNumber {
                    imo_number: vessel.imo_number,
                });
            }
        }

        Ok(Self {
            vessels,
            source: None,
        })
    }

    /// Load a catalog from a JSON file containing an array of profiles.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let vessels: Vec<VesselProfile> = serde_json::from_reader(reader)?;
        Self::from_vessels(vessels)
    }

    /// The built-in demo catalog: a single tanker used when no catalog file
    /// is supplied.
    pub fn builtin() -> Self {
        Self {
            vessels: vec![VesselProfile {
                imo_number: 9_999_999,
                name: "Demo Vessel".to_string(),
                vessel_type: "Tanker".to_string(),
                country: "SC".to_string(),
                build_year: 2015,
                shipyard: "Kernel Shipyard".to_string(),
                dwt: 220_000.0,
                beam: 55.0,
                loa: 300.0,
                mcr: 21_900.0,
                max_rpm: 60.0,
            }],
            source: None,
        }
    }

    /// Look up a vessel by exact IMO number.
    pub fn get(&self, imo_number: u64) -> Option<&VesselProfile> {
        self.vessels.iter().find(|v| v.imo_number == imo_number)
    }

    /// Resolve an IMO number, falling back to the default profile.
    ///
    /// Never fails; the `substituted` flag records whether the fallback was
    /// taken.
    pub fn resolve(&self, imo_number: u64) -> VesselResolution<'_> {
        match self.get(imo_number) {
            Some(profile) => VesselResolution {
                profile,
                substituted: false,
            },
            None => {
                debug!(imo_number, "unknown IMO number, substituting default profile");
                VesselResolution {
                    profile: self.default_profile(),
                    substituted: true,
                }
            }
        }
    }

    /// The catalog's default profile (its first entry).
    pub fn default_profile(&self) -> &VesselProfile {
        // from_vessels and builtin both guarantee at least one entry.
        &self.vessels[0]
    }

    /// All profiles in catalog order.
    pub fn vessels(&self) -> &[VesselProfile] {
        &self.vessels
    }

    /// Number of vessels in the catalog.
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    /// Always false: catalogs are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Build the list-vessels payload with a current UTC timestamp.
    pub fn listing(&self) -> CatalogListing {
        CatalogListing {
            status: "success".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            total_vessels: self.vessels.len(),
            vessels: self.vessels.clone(),
        }
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for VesselCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
