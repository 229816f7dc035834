//! Performance simulator: per-sample metric generation with limit checks.
//!
//! The simulator is a pure function of (vessel profile, speed samples,
//! conditioning parameters, random source) to (metric series, limit
//! violations). Each requested speed-through-water sample yields one value
//! per metric: a fixed base curve scaled by the environmental correction
//! factors and a bounded uniform jitter, then clipped against the vessel's
//! physical limits. Clipping is recorded as data, never as an error, and
//! generation always runs to completion.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conditioning::{ConditioningOverrides, ConditioningParameters};
use crate::constants::{RPM_CLIP_FACTOR, USABLE_MCR_FACTOR};
use crate::environment::environmental_factors;
use crate::vessel::{VesselCatalog, VesselProfile};

/// Default speed-through-water sweep: 8 to 16 knots at 1-knot intervals.
pub const DEFAULT_STW_RANGE: [f64; 9] = [8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];

/// Number of slots in the base-value tables. Samples beyond this index have
/// no reference curve and yield no data.
pub const BASE_SLOTS: usize = 9;

// Reference performance curve for the 8-14 knot band. The last two slots are
// deliberately empty; the model does not extrapolate past the curve.
const SOG_BASE: [Option<f64>; BASE_SLOTS] = [
    Some(7.02808),
    Some(8.02808),
    Some(9.02808),
    Some(10.02808),
    Some(11.02808),
    Some(12.02808),
    Some(13.02808),
    None,
    None,
];

const RPM_BASE: [Option<f64>; BASE_SLOTS] = [
    Some(35.563477161420984),
    Some(38.86856315406255),
    Some(42.3286138994565),
    Some(45.958934292444695),
    Some(49.77248238124245),
    Some(53.780632616735986),
    Some(57.993745359998364),
    None,
    None,
];

const POWER_BASE: [Option<f64>; BASE_SLOTS] = [
    Some(4014.487664675082),
    Some(5034.96591338081),
    Some(6306.250909817854),
    Some(7883.151679670297),
    Some(9830.679471751078),
    Some(12225.665331559763),
    Some(15158.644854083537),
    None,
    None,
];

const FUEL_BASE: [Option<f64>; BASE_SLOTS] = [
    Some(18.24386889835794),
    Some(22.461921943399787),
    Some(27.57687777045103),
    Some(33.79875072031291),
    Some(41.47119688825557),
    Some(51.21728628254814),
    Some(64.2267638497258),
    None,
    None,
];

const EMISSION_BASE: [Option<f64>; BASE_SLOTS] = [
    Some(57.842186342243835),
    Some(71.21552352154902),
    Some(87.43249097121499),
    Some(107.15893915875206),
    Some(131.48442973421427),
    Some(162.38440615881885),
    Some(203.63095478555562),
    None,
    None,
];

// Uniform jitter bands per metric, independent draws per metric per index.
const SOG_JITTER: (f64, f64) = (0.97, 1.03);
const RPM_JITTER: (f64, f64) = (0.98, 1.02);
const POWER_JITTER: (f64, f64) = (0.95, 1.05);
const FUEL_JITTER: (f64, f64) = (0.96, 1.04);
const EMISSION_JITTER: (f64, f64) = (0.96, 1.04);

/// Error code emitted when computed RPM reaches the vessel's max RPM.
pub const MAX_RPM_LIMIT_EXCEEDED: &str = "max_rpm_limit_exceeded";
/// Error code emitted when computed power reaches 90% of MCR.
pub const MAX_MCR_LIMIT_EXCEEDED: &str = "max_mcr_limit_exceeded";

/// A recorded event where a computed metric exceeded a physical ceiling and
/// was clipped. Violations accumulate; they never abort a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitViolation {
    pub error_code: String,
    pub description: String,
    /// Sample indices affected by this violation.
    pub indices: Vec<usize>,
}

/// Simulation request as received from the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    pub imo_number: u64,
    /// Requested STW samples; `None` entries are "no data" placeholders.
    /// Defaults to [`DEFAULT_STW_RANGE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stw_range: Option<Vec<Option<f64>>>,
    /// Partial conditioning overrides, merged over defaults.
    #[serde(default)]
    pub conditioning: ConditioningOverrides,
}

/// Six index-aligned metric series plus accumulated limit violations.
///
/// Every series has exactly the length of the input sample sequence, and
/// "no data" positions stay aligned so consumers can pair-filter reliably.
/// The series are never pre-filtered here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub sog: Vec<Option<f64>>,
    pub stw: Vec<Option<f64>>,
    pub me_rpm: Vec<Option<f64>>,
    pub me_power: Vec<Option<f64>>,
    pub me_fo_consumption: Vec<Option<f64>>,
    pub me_fo_emission: Vec<Option<f64>>,
    pub errors: Vec<LimitViolation>,
}

/// Simulation output wrapped with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub imo_number: u64,
    /// True when the requested IMO number was absent from the catalog and
    /// the default profile was used instead.
    pub substituted_profile: bool,
    /// The fully resolved conditioning parameters the simulation ran with.
    pub conditioning: ConditioningParameters,
    pub series: PerformanceSeries,
}

/// Run a request end to end: resolve the vessel, merge conditioning
/// overrides, and simulate.
pub fn run_request(
    catalog: &VesselCatalog,
    request: &PerformanceRequest,
    rng: &mut impl Rng,
) -> PerformanceReport {
    let resolution = catalog.resolve(request.imo_number);
    let params = ConditioningParameters::resolve(&request.conditioning);

    let default_range;
    let stw_range: &[Option<f64>] = match &request.stw_range {
        Some(range) => range,
        None => {
            default_range = DEFAULT_STW_RANGE.map(Some);
            &default_range
        }
    };

    PerformanceReport {
        imo_number: request.imo_number,
        substituted_profile: resolution.substituted,
        conditioning: params,
        series: simulate(resolution.profile, stw_range, &params, rng),
    }
}

/// Generate the six metric series for a resolved vessel and parameter set.
///
/// Output ordering matches the input sample order exactly; index alignment
/// is load-bearing for downstream pairing with charts and tables.
pub fn simulate(
    profile: &VesselProfile,
    stw_range: &[Option<f64>],
    params: &ConditioningParameters,
    rng: &mut impl Rng,
) -> PerformanceSeries {
    let factors = environmental_factors(params);
    let usable_power_ceiling = profile.mcr * USABLE_MCR_FACTOR;

    let len = stw_range.len();
    let mut sog = Vec::with_capacity(len);
    let mut stw_out = Vec::with_capacity(len);
    let mut me_rpm = Vec::with_capacity(len);
    let mut me_power = Vec::with_capacity(len);
    let mut me_fo_consumption = Vec::with_capacity(len);
    let mut me_fo_emission = Vec::with_capacity(len);
    let mut errors = Vec::new();

    for (i, &sample) in stw_range.iter().enumerate() {
        let Some(stw) = sample else {
            sog.push(None);
            stw_out.push(None);
            me_rpm.push(None);
            me_power.push(None);
            me_fo_consumption.push(None);
            me_fo_emission.push(None);
            continue;
        };

        sog.push(
            base_at(&SOG_BASE, i)
                .map(|base| round_to(base * factors.sog_factor * jitter(rng, SOG_JITTER), 5)),
        );

        // STW echoes the literal input sample; it is never jittered.
        stw_out.push(Some(stw));

        me_rpm.push(match base_at(&RPM_BASE, i) {
            Some(base) => {
                let mut rpm = base * factors.rpm_factor * jitter(rng, RPM_JITTER);
                if rpm >= profile.max_rpm {
                    debug!(index = i, rpm, max_rpm = profile.max_rpm, "clipping RPM");
                    rpm = profile.max_rpm * RPM_CLIP_FACTOR;
                    errors.push(LimitViolation {
                        error_code: MAX_RPM_LIMIT_EXCEEDED.to_string(),
                        description: format!("Maximum RPM ({} RPM) exceeded.", profile.max_rpm),
                        indices: vec![i],
                    });
                }
                Some(round_to(rpm, 5))
            }
            None => None,
        });

        me_power.push(match base_at(&POWER_BASE, i) {
            Some(base) => {
                let mut power = base * factors.power_factor * jitter(rng, POWER_JITTER);
                if power >= usable_power_ceiling {
                    debug!(
                        index = i,
                        power,
                        ceiling = usable_power_ceiling,
                        "clipping power"
                    );
                    power = usable_power_ceiling;
                    errors.push(LimitViolation {
                        error_code: MAX_MCR_LIMIT_EXCEEDED.to_string(),
                        description: format!("90% Maximum MCR ({} kW) exceeded.", profile.mcr),
                        indices: vec![i],
                    });
                }
                Some(round_to(power, 2))
            }
            None => None,
        });

        me_fo_consumption.push(
            base_at(&FUEL_BASE, i)
                .map(|base| round_to(base * factors.fuel_factor * jitter(rng, FUEL_JITTER), 2)),
        );

        me_fo_emission.push(base_at(&EMISSION_BASE, i).map(|base| {
            round_to(base * factors.emission_factor * jitter(rng, EMISSION_JITTER), 2)
        }));
    }

    PerformanceSeries {
        sog,
        stw: stw_out,
        me_rpm,
        me_power,
        me_fo_consumption,
        me_fo_emission,
        errors,
    }
}

/// Base value for an index, or `None` past the table or in an empty slot.
fn base_at(table: &[Option<f64>; BASE_SLOTS], index: usize) -> Option<f64> {
    table.get(index).copied().flatten()
}

/// Draw a jitter multiplier uniformly from the given band.
fn jitter(rng: &mut impl Rng, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..=high)
}

/// Round to a fixed number of decimal places. A presentation contract for
/// the boundary payloads, not a precision requirement.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
