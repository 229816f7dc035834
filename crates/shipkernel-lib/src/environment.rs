//! Environmental correction factors derived from conditioning parameters.
//!
//! This module turns a resolved [`ConditioningParameters`] set into the five
//! multiplicative factors the simulator applies to its base performance
//! curves. The mapping is a pure function with no failure path: extreme or
//! nonsensical inputs yield degenerate factors rather than errors.

use crate::conditioning::ConditioningParameters;
use crate::constants::{
    CURRENT_SOG_GAIN, DRAFT_BASELINE_M, DRAFT_PENALTY_PER_M, FUEL_OVERHEAD, RPM_POWER_EXPONENT,
    TRIM_PENALTY_PER_M, WAVE_DRAG_PER_M, WIND_RESISTANCE_PER_MS,
};

/// Multiplicative correction factors applied per metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalFactors {
    /// Applied to speed over ground (current assistance).
    pub sog_factor: f64,
    /// Applied to main engine power.
    pub power_factor: f64,
    /// Applied to fuel consumption.
    pub fuel_factor: f64,
    /// Applied to fuel emissions.
    pub emission_factor: f64,
    /// Applied to main engine RPM.
    pub rpm_factor: f64,
}

/// Compute the environmental correction factors for a parameter set.
///
/// Wind and current are compared against the ship heading via an angle fold
/// into `[0, 180]` degrees; the fold discards the head/tail distinction, so
/// only the resistance (wind) and assistance (current) terms below 90 degrees
/// apply. Tailwind relief is intentionally not modelled.
pub fn environmental_factors(params: &ConditioningParameters) -> EnvironmentalFactors {
    // Wind: headwind component adds resistance, scaled by how head-on it is.
    let wind_angle = relative_angle(params.wind_direction, params.ship_heading);
    let mut wind_factor = 1.0;
    if wind_angle < 90.0 {
        wind_factor += params.wind_speed * WIND_RESISTANCE_PER_MS * (wind_angle / 90.0);
    }

    // Waves: linear drag increase with significant wave height, no cap.
    let wave_factor = 1.0 + params.wave_height * WAVE_DRAG_PER_M;

    // Current: a following current raises speed over ground.
    let current_angle = relative_angle(params.current_direction, params.ship_heading);
    let mut sog_factor = 1.0;
    if current_angle < 90.0 {
        sog_factor += params.current_speed * CURRENT_SOG_GAIN * (current_angle / 90.0);
    }

    // Draft: linear penalty relative to the baseline; shallower drafts
    // drop below 1.0.
    let draft_factor = 1.0 + (params.mean_draft - DRAFT_BASELINE_M) * DRAFT_PENALTY_PER_M;

    // Trim: symmetric penalty regardless of sign.
    let trim_factor = 1.0 + params.trim.abs() * TRIM_PENALTY_PER_M;

    let power_factor = wind_factor * wave_factor * draft_factor * trim_factor;
    let fuel_factor = power_factor * FUEL_OVERHEAD;

    EnvironmentalFactors {
        sog_factor,
        power_factor,
        fuel_factor,
        emission_factor: fuel_factor,
        rpm_factor: power_factor.powf(RPM_POWER_EXPONENT),
    }
}

/// Fold the absolute difference between a direction and a heading into
/// `[0, 180]` degrees.
fn relative_angle(direction: f64, heading: f64) -> f64 {
    let angle = (direction - heading).abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}
