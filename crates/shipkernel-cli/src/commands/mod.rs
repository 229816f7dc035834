//! Subcommand handlers and shared argument parsing.

pub mod chart;
pub mod performance;
pub mod ships;

use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use shipkernel_lib::{ConditioningOverrides, VesselCatalog};

/// Load the vessel catalog from a file, or fall back to the built-in demo
/// catalog when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<VesselCatalog> {
    match path {
        Some(path) => VesselCatalog::from_path(path)
            .with_context(|| format!("failed to load vessel catalog from {}", path.display())),
        None => Ok(VesselCatalog::builtin()),
    }
}

/// Build the simulation's random source, seeded when requested so runs are
/// reproducible.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parse a comma-separated STW sample list; `null`, `none`, or `-` mark a
/// "no data" gap at that index.
pub fn parse_stw_range(raw: &str) -> Result<Vec<Option<f64>>> {
    raw.split(',')
        .map(str::trim)
        .map(|token| match token.to_ascii_lowercase().as_str() {
            "null" | "none" | "-" => Ok(None),
            _ => token
                .parse::<f64>()
                .map(Some)
                .with_context(|| format!("invalid STW sample '{token}'")),
        })
        .collect()
}

/// Parse repeated `key=value` conditioning overrides.
///
/// Unlike the serde boundary, which silently ignores unknown keys, the CLI
/// rejects them so a typo does not run a simulation under defaults the user
/// did not intend.
pub fn parse_overrides(pairs: &[String]) -> Result<ConditioningOverrides> {
    let mut overrides = ConditioningOverrides::default();

    for pair in pairs {
        let Some((key, raw_value)) = pair.split_once('=') else {
            bail!("expected KEY=VALUE, got '{pair}'");
        };
        let value: f64 = raw_value
            .trim()
            .parse()
            .with_context(|| format!("invalid value for '{key}': '{raw_value}'"))?;

        let slot = match key.trim() {
            "wind_speed" => &mut overrides.wind_speed,
            "wind_direction" => &mut overrides.wind_direction,
            "wave_height" => &mut overrides.wave_height,
            "wave_direction" => &mut overrides.wave_direction,
            "current_speed" => &mut overrides.current_speed,
            "current_direction" => &mut overrides.current_direction,
            "mean_draft" => &mut overrides.mean_draft,
            "trim" => &mut overrides.trim,
            "ship_heading" => &mut overrides.ship_heading,
            "fuel_specific_energy" => &mut overrides.fuel_specific_energy,
            other => bail!(
                "unrecognized conditioning parameter '{other}'; known keys: \
                 wind_speed, wind_direction, wave_height, wave_direction, \
                 current_speed, current_direction, mean_draft, trim, \
                 ship_heading, fuel_specific_energy"
            ),
        };
        *slot = Some(value);
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stw_list_with_gaps() {
        let parsed = parse_stw_range("8, 9.5, null, 11,-").expect("valid list");
        assert_eq!(
            parsed,
            vec![Some(8.0), Some(9.5), None, Some(11.0), None]
        );
    }

    #[test]
    fn rejects_malformed_stw_sample() {
        assert!(parse_stw_range("8,fast").is_err());
    }

    #[test]
    fn parses_known_override_keys() {
        let overrides =
            parse_overrides(&["wind_speed=10".to_string(), "trim=-2".to_string()])
                .expect("valid overrides");
        assert_eq!(overrides.wind_speed, Some(10.0));
        assert_eq!(overrides.trim, Some(-2.0));
        assert_eq!(overrides.wave_height, None);
    }

    #[test]
    fn rejects_unknown_override_key() {
        let err = parse_overrides(&["sea_monsters=3".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unrecognized conditioning parameter"));
    }

    #[test]
    fn rejects_pair_without_equals_sign() {
        assert!(parse_overrides(&["wind_speed".to_string()]).is_err());
    }
}
