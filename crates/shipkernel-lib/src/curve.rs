//! Speed-fuel curve extraction for chart consumers.
//!
//! The simulator never pre-filters its series; this module owns the
//! negotiated side of that contract. It pairs speed-through-water with fuel
//! consumption index by index, drops pairs where either side is "no data",
//! and summarizes the result for chart annotation.

use serde::{Deserialize, Serialize};

use crate::conditioning::ConditioningParameters;
use crate::simulator::PerformanceSeries;

/// One renderable point on the speed-fuel curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Speed through water [kn].
    pub stw: f64,
    /// Fuel consumption [mt/day].
    pub fuel: f64,
}

/// Summary metadata attached to a rendered curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMetadata {
    pub imo_number: u64,
    pub conditioning: ConditioningParameters,
    /// `[min, max]` of the plotted speeds, absent when no points survive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stw_range: Option<[f64; 2]>,
    /// `[min, max]` of the plotted fuel values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_range: Option<[f64; 2]>,
    /// Speed at which fuel consumption is lowest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_fuel_speed: Option<f64>,
}

/// A null-filtered speed-fuel curve ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedFuelCurve {
    pub points: Vec<CurvePoint>,
    pub metadata: CurveMetadata,
}

/// Extract the speed-fuel curve from a performance series.
///
/// Pairs are dropped when either `stw` or `me_fo_consumption` is missing at
/// an index; surviving points keep the input order. An all-null series
/// produces an empty curve with empty metadata ranges.
pub fn speed_fuel_curve(
    imo_number: u64,
    conditioning: ConditioningParameters,
    series: &PerformanceSeries,
) -> SpeedFuelCurve {
    let points: Vec<CurvePoint> = series
        .stw
        .iter()
        .zip(&series.me_fo_consumption)
        .filter_map(|(stw, fuel)| match (stw, fuel) {
            (Some(stw), Some(fuel)) => Some(CurvePoint {
                stw: *stw,
                fuel: *fuel,
            }),
            _ => None,
        })
        .collect();

    let stw_range = bounds(points.iter().map(|p| p.stw));
    let fuel_range = bounds(points.iter().map(|p| p.fuel));
    let min_fuel_speed = points
        .iter()
        .min_by(|a, b| a.fuel.total_cmp(&b.fuel))
        .map(|p| p.stw);

    SpeedFuelCurve {
        points,
        metadata: CurveMetadata {
            imo_number,
            conditioning,
            stw_range,
            fuel_range,
            min_fuel_speed,
        },
    }
}

fn bounds(values: impl Iterator<Item = f64> + Clone) -> Option<[f64; 2]> {
    let min = values.clone().min_by(f64::total_cmp)?;
    let max = values.max_by(f64::total_cmp)?;
    Some([min, max])
}
