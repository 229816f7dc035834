//! Shipkernel library entry points.
//!
//! This crate exposes the vessel performance simulator: catalog lookup,
//! conditioning parameter resolution, environmental correction factors,
//! per-sample metric generation with limit clipping, and speed-fuel curve
//! extraction. Higher-level consumers (CLI, tool dispatch) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod conditioning;
pub mod constants;
pub mod curve;
pub mod environment;
pub mod error;
pub mod simulator;
pub mod vessel;

pub use conditioning::{ConditioningOverrides, ConditioningParameters};
pub use curve::{speed_fuel_curve, CurveMetadata, CurvePoint, SpeedFuelCurve};
pub use environment::{environmental_factors, EnvironmentalFactors};
pub use error::{Error, Result};
pub use simulator::{
    run_request, simulate, LimitViolation, PerformanceReport, PerformanceRequest,
    PerformanceSeries, DEFAULT_STW_RANGE,
};
pub use vessel::{CatalogListing, VesselCatalog, VesselProfile, VesselResolution};
