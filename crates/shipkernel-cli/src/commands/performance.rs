//! Performance command handler: the fetch-performance tool surface.

use anyhow::{Context, Result};

use shipkernel_lib::{run_request, PerformanceRequest, VesselCatalog};

use super::{make_rng, parse_overrides, parse_stw_range};

/// Simulate a performance curve and print the full report as JSON.
pub fn handle_performance(
    catalog: &VesselCatalog,
    seed: Option<u64>,
    imo: u64,
    stw: Option<&str>,
    set: &[String],
) -> Result<()> {
    let request = build_request(imo, stw, set)?;
    let mut rng = make_rng(seed);

    let report = run_request(catalog, &request, &mut rng);
    if report.substituted_profile {
        tracing::warn!(
            imo_number = imo,
            "IMO number not in catalog; simulated with the default profile"
        );
    }

    let json =
        serde_json::to_string_pretty(&report).context("failed to serialize performance report")?;
    println!("{json}");
    Ok(())
}

/// Assemble a simulation request from command-line arguments.
pub fn build_request(imo: u64, stw: Option<&str>, set: &[String]) -> Result<PerformanceRequest> {
    Ok(PerformanceRequest {
        imo_number: imo,
        stw_range: stw.map(parse_stw_range).transpose()?,
        conditioning: parse_overrides(set)?,
    })
}
