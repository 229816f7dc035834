//! Static vessel profiles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Static characteristics of one vessel.
///
/// Only `imo_number`, `max_rpm`, and `mcr` participate in simulation; the
/// remaining fields are descriptive metadata passed through to consumers
/// (catalog listings, chart annotations) untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselProfile {
    /// International Maritime Organization identifier, unique per vessel.
    pub imo_number: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub country: String,
    pub build_year: u32,
    pub shipyard: String,
    /// Deadweight tonnage [t].
    pub dwt: f64,
    /// Beam [m].
    pub beam: f64,
    /// Length overall [m].
    pub loa: f64,
    /// Maximum continuous rating [kW]. The usable ceiling enforced by the
    /// simulator is 90% of this value.
    pub mcr: f64,
    /// Hard ceiling on main-engine RPM.
    pub max_rpm: f64,
}

impl VesselProfile {
    /// Validate the fields that drive simulation limits.
    ///
    /// Descriptive metadata is deliberately not checked.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::VesselDataValidation {
                message: "vessel name must not be empty".to_string(),
            });
        }

        let limits = [(self.max_rpm, "max_rpm"), (self.mcr, "mcr")];
        for (value, field) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VesselDataValidation {
                    message: format!(
                        "{field} must be a finite positive number for vessel '{}'",
                        self.name
                    ),
                });
            }
        }

        Ok(())
    }
}
