use rand::rngs::StdRng;
use rand::SeedableRng;

use shipkernel_lib::{
    environmental_factors, run_request, simulate, ConditioningOverrides, ConditioningParameters,
    PerformanceRequest, VesselCatalog,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn default_request(imo_number: u64) -> PerformanceRequest {
    PerformanceRequest {
        imo_number,
        stw_range: None,
        conditioning: ConditioningOverrides::default(),
    }
}

#[test]
fn series_lengths_match_input_and_nulls_propagate() {
    let catalog = VesselCatalog::builtin();
    let stw_range = vec![Some(8.0), None, Some(10.0)];
    let series = simulate(
        catalog.default_profile(),
        &stw_range,
        &ConditioningParameters::default(),
        &mut rng(1),
    );

    for column in [
        &series.sog,
        &series.stw,
        &series.me_rpm,
        &series.me_power,
        &series.me_fo_consumption,
        &series.me_fo_emission,
    ] {
        assert_eq!(column.len(), 3);
        assert!(column[1].is_none());
    }

    assert_eq!(series.stw[0], Some(8.0));
    assert_eq!(series.stw[2], Some(10.0));
    assert!(series.sog[0].is_some());
    assert!(series.me_fo_consumption[2].is_some());
}

#[test]
fn default_range_produces_nine_samples() {
    let catalog = VesselCatalog::builtin();
    let report = run_request(&catalog, &default_request(9_999_999), &mut rng(2));

    assert_eq!(report.series.stw.len(), 9);
    assert_eq!(report.series.stw[0], Some(8.0));
    assert_eq!(report.series.stw[8], Some(16.0));
    assert!(!report.substituted_profile);
    // Only the first seven slots have a reference curve.
    assert!(report.series.me_rpm[6].is_some());
    assert!(report.series.me_rpm[7].is_none());
    assert!(report.series.sog[8].is_none());
}

#[test]
fn samples_past_the_base_table_yield_no_data() {
    let catalog = VesselCatalog::builtin();
    let stw_range: Vec<Option<f64>> =
        (0..10).map(|i| Some(8.0 + i as f64)).collect();
    let request = PerformanceRequest {
        stw_range: Some(stw_range),
        ..default_request(9_999_999)
    };
    let report = run_request(&catalog, &request, &mut rng(3));
    let series = &report.series;

    assert_eq!(series.stw.len(), 10);
    assert!(series.sog[9].is_none());
    assert!(series.me_rpm[9].is_none());
    assert!(series.me_power[9].is_none());
    assert!(series.me_fo_consumption[9].is_none());
    assert!(series.me_fo_emission[9].is_none());
    // The echo of the input sample itself is preserved.
    assert_eq!(series.stw[9], Some(17.0));
}

#[test]
fn two_sample_scenario_stays_within_jitter_band_without_violations() {
    let catalog = VesselCatalog::builtin();
    let profile = catalog.default_profile();
    assert_eq!(profile.max_rpm, 60.0);
    assert_eq!(profile.mcr, 21_900.0);

    let request = PerformanceRequest {
        stw_range: Some(vec![Some(8.0), Some(9.0)]),
        ..default_request(9_999_999)
    };
    let report = run_request(&catalog, &request, &mut rng(4));
    let series = &report.series;

    assert_eq!(series.stw.len(), 2);
    assert_eq!(series.stw[0], Some(8.0));
    assert!(series.errors.is_empty());

    // Fuel at 8 kn is the base value scaled by the default-conditions fuel
    // factor, within the ±4% jitter band.
    let factors = environmental_factors(&ConditioningParameters::default());
    let expected = 18.24386889835794 * factors.fuel_factor;
    let fuel = series.me_fo_consumption[0].expect("fuel present at 8 kn");
    assert!(fuel >= expected * 0.96 - 1e-9, "fuel {fuel} below band");
    assert!(fuel <= expected * 1.04 + 1e-9, "fuel {fuel} above band");
}

#[test]
fn identical_seeds_reproduce_identical_series() {
    let catalog = VesselCatalog::builtin();
    let request = default_request(9_999_999);

    let first = run_request(&catalog, &request, &mut rng(99));
    let second = run_request(&catalog, &request, &mut rng(99));

    assert_eq!(first, second);
}

#[test]
fn conditioning_overrides_flow_into_the_report() {
    let catalog = VesselCatalog::builtin();
    let request = PerformanceRequest {
        conditioning: ConditioningOverrides {
            wave_height: Some(5.0),
            ..Default::default()
        },
        ..default_request(9_999_999)
    };
    let report = run_request(&catalog, &request, &mut rng(5));

    assert_eq!(report.conditioning.wave_height, 5.0);
    assert_eq!(
        report.conditioning.wind_speed,
        ConditioningParameters::default().wind_speed
    );
}
