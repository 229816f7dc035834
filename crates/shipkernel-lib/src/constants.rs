//! Shared constants used across the environmental factor and simulator math.

/// Added resistance per m/s of wind at a full headwind (2%).
pub const WIND_RESISTANCE_PER_MS: f64 = 0.02;

/// Added drag per meter of significant wave height (3%), uncapped.
pub const WAVE_DRAG_PER_M: f64 = 0.03;

/// Speed-over-ground gain per m/s of following current (10%).
pub const CURRENT_SOG_GAIN: f64 = 0.1;

/// Baseline mean draft [m]; drafts above this add resistance, shallower
/// drafts reduce it below 1.0.
pub const DRAFT_BASELINE_M: f64 = 20.0;

/// Resistance change per meter of draft deviation from the baseline (1%).
pub const DRAFT_PENALTY_PER_M: f64 = 0.01;

/// Resistance penalty per meter of trim, symmetric in sign (0.5%).
pub const TRIM_PENALTY_PER_M: f64 = 0.005;

/// Fuel consumption tracks power with a fixed overhead multiplier.
pub const FUEL_OVERHEAD: f64 = 1.1;

/// RPM responds to load sub-linearly relative to power.
pub const RPM_POWER_EXPONENT: f64 = 0.8;

/// Usable fraction of the engine's maximum continuous rating. Power is
/// clipped at 90% of MCR, not at the nameplate rating.
pub const USABLE_MCR_FACTOR: f64 = 0.9;

/// Fraction of max RPM that clipped values settle at.
pub const RPM_CLIP_FACTOR: f64 = 0.98;
