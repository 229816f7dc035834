//! Conditioning parameter defaults and override resolution.
//!
//! Conditioning parameters are the ten environmental/operational scalars that
//! perturb a simulated performance curve. Every simulation runs with a fully
//! populated set: caller overrides are merged over the canonical defaults
//! field by field, so no parameter is ever left unset.

use serde::{Deserialize, Serialize};

/// Complete set of environmental and operational conditioning parameters.
///
/// Values are deliberately unvalidated; physically nonsensical inputs (e.g.
/// a negative wave height) propagate straight into the factor math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditioningParameters {
    /// Wind speed [m/s].
    pub wind_speed: f64,
    /// Wind direction [degrees].
    pub wind_direction: f64,
    /// Significant wave height [m].
    pub wave_height: f64,
    /// Wave direction [degrees].
    pub wave_direction: f64,
    /// Current speed [m/s].
    pub current_speed: f64,
    /// Current direction [degrees].
    pub current_direction: f64,
    /// Mean draft [m].
    pub mean_draft: f64,
    /// Trim [m]; negative values indicate stern trim.
    pub trim: f64,
    /// Ship heading [degrees].
    pub ship_heading: f64,
    /// Fuel specific energy [MJ/kg].
    pub fuel_specific_energy: f64,
}

impl Default for ConditioningParameters {
    /// Canonical defaults: moderate wind and sea state, mild following
    /// current, loaded vessel with slight stern trim, heading north.
    fn default() -> Self {
        Self {
            wind_speed: 6.0,
            wind_direction: 180.0,
            wave_height: 2.0,
            wave_direction: 90.0,
            current_speed: 0.5,
            current_direction: 0.0,
            mean_draft: 20.0,
            trim: -1.0,
            ship_heading: 0.0,
            fuel_specific_energy: 41.5,
        }
    }
}

impl ConditioningParameters {
    /// Resolve a partial override set into a complete parameter set.
    ///
    /// Each override is applied with set-if-present semantics over the
    /// defaults; absent fields retain their default value. No range
    /// validation is performed on the supplied values.
    pub fn resolve(overrides: &ConditioningOverrides) -> Self {
        let mut params = Self::default();
        params.apply(overrides);
        params
    }

    /// Overlay the supplied overrides onto this parameter set in place.
    pub fn apply(&mut self, overrides: &ConditioningOverrides) {
        let fields = [
            (&mut self.wind_speed, overrides.wind_speed),
            (&mut self.wind_direction, overrides.wind_direction),
            (&mut self.wave_height, overrides.wave_height),
            (&mut self.wave_direction, overrides.wave_direction),
            (&mut self.current_speed, overrides.current_speed),
            (&mut self.current_direction, overrides.current_direction),
            (&mut self.mean_draft, overrides.mean_draft),
            (&mut self.trim, overrides.trim),
            (&mut self.ship_heading, overrides.ship_heading),
            (&mut self.fuel_specific_energy, overrides.fuel_specific_energy),
        ];

        for (target, value) in fields {
            if let Some(value) = value {
                *target = value;
            }
        }
    }
}

/// Partial conditioning parameter set supplied by a caller.
///
/// Deserialized from tool input payloads; keys that do not name one of the
/// ten recognized parameters are ignored by serde rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditioningOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_draft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_specific_energy: Option<f64>,
}

impl ConditioningOverrides {
    /// True if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
