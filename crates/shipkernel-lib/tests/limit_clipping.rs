use rand::rngs::StdRng;
use rand::SeedableRng;

use shipkernel_lib::simulator::{MAX_MCR_LIMIT_EXCEEDED, MAX_RPM_LIMIT_EXCEEDED};
use shipkernel_lib::{
    run_request, ConditioningOverrides, PerformanceRequest, VesselCatalog, VesselProfile,
};

fn constrained_vessel(max_rpm: f64, mcr: f64) -> VesselProfile {
    VesselProfile {
        imo_number: 1_234_567,
        name: "Constrained".to_string(),
        vessel_type: "Tanker".to_string(),
        country: "SC".to_string(),
        build_year: 2015,
        shipyard: "Kernel Shipyard".to_string(),
        dwt: 220_000.0,
        beam: 55.0,
        loa: 300.0,
        mcr,
        max_rpm,
    }
}

fn request() -> PerformanceRequest {
    PerformanceRequest {
        imo_number: 1_234_567,
        stw_range: None,
        conditioning: ConditioningOverrides::default(),
    }
}

#[test]
fn rpm_above_ceiling_is_clipped_and_recorded_per_index() {
    // max_rpm below the smallest achievable RPM: every real slot clips.
    let catalog = VesselCatalog::from_vessels(vec![constrained_vessel(30.0, 21_900.0)]).unwrap();
    let report = run_request(&catalog, &request(), &mut StdRng::seed_from_u64(11));
    let series = &report.series;

    let rpm_violations: Vec<_> = series
        .errors
        .iter()
        .filter(|e| e.error_code == MAX_RPM_LIMIT_EXCEEDED)
        .collect();
    assert_eq!(rpm_violations.len(), 7);

    for (i, violation) in rpm_violations.iter().enumerate() {
        assert_eq!(violation.indices, vec![i]);
        assert!(violation.description.contains("30"));
    }

    for rpm in series.me_rpm.iter().flatten() {
        assert!((rpm - 29.4).abs() < 1e-9);
    }
}

#[test]
fn power_above_usable_mcr_is_clipped_and_recorded_per_index() {
    // 90% of 4000 kW sits below the smallest achievable power draw.
    let catalog = VesselCatalog::from_vessels(vec![constrained_vessel(200.0, 4_000.0)]).unwrap();
    let report = run_request(&catalog, &request(), &mut StdRng::seed_from_u64(12));
    let series = &report.series;

    let power_violations: Vec<_> = series
        .errors
        .iter()
        .filter(|e| e.error_code == MAX_MCR_LIMIT_EXCEEDED)
        .collect();
    assert_eq!(power_violations.len(), 7);

    for (i, violation) in power_violations.iter().enumerate() {
        assert_eq!(violation.indices, vec![i]);
        assert!(violation.description.contains("4000"));
    }

    for power in series.me_power.iter().flatten() {
        assert_eq!(*power, 3600.0);
    }
}

#[test]
fn clipping_invariant_holds_for_all_generated_samples() {
    let vessels = vec![
        constrained_vessel(45.0, 9_000.0),
        constrained_vessel(60.0, 21_900.0),
    ];
    // Two catalogs so each vessel is resolvable as the default.
    for vessel in vessels {
        let max_rpm = vessel.max_rpm;
        let mcr = vessel.mcr;
        let catalog = VesselCatalog::from_vessels(vec![vessel]).unwrap();
        for seed in 0..32 {
            let report = run_request(&catalog, &request(), &mut StdRng::seed_from_u64(seed));
            // Values at or above max_rpm clip down to 98% of it; values just
            // under the ceiling pass through, so the hard bound is max_rpm.
            for rpm in report.series.me_rpm.iter().flatten() {
                assert!(*rpm <= max_rpm + 1e-9);
            }
            for power in report.series.me_power.iter().flatten() {
                assert!(*power <= mcr * 0.9 + 1e-9);
            }
        }
    }
}

#[test]
fn violations_accumulate_without_early_termination() {
    // Both limits impossible to satisfy: every index records both kinds.
    let catalog = VesselCatalog::from_vessels(vec![constrained_vessel(30.0, 4_000.0)]).unwrap();
    let report = run_request(&catalog, &request(), &mut StdRng::seed_from_u64(13));
    let series = &report.series;

    assert_eq!(series.errors.len(), 14);
    assert_eq!(series.stw.len(), 9);
    // Fuel and emissions are unaffected by clipping and still populated.
    assert_eq!(
        series.me_fo_consumption.iter().flatten().count(),
        7
    );
}
