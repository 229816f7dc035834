//! Chart command handler: the render-chart tool surface.
//!
//! Rendering itself is a downstream concern; this command emits the
//! null-filtered curve points plus the metadata summary a renderer needs.

use anyhow::{Context, Result};

use shipkernel_lib::{run_request, speed_fuel_curve, VesselCatalog};

use super::{make_rng, performance::build_request};

/// Simulate and print the speed-fuel curve as JSON.
pub fn handle_chart(
    catalog: &VesselCatalog,
    seed: Option<u64>,
    imo: u64,
    stw: Option<&str>,
    set: &[String],
) -> Result<()> {
    let request = build_request(imo, stw, set)?;
    let mut rng = make_rng(seed);

    let report = run_request(catalog, &request, &mut rng);
    let curve = speed_fuel_curve(report.imo_number, report.conditioning, &report.series);

    let json =
        serde_json::to_string_pretty(&curve).context("failed to serialize speed-fuel curve")?;
    println!("{json}");
    Ok(())
}
