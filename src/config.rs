//! Generator configuration.
//!
//! Every tunable constant of the synthesizer lives here. The defaults
//! reproduce the dashboard's mock generator; hosts can override individual
//! fields with the `with_*` builders or deserialize a partial JSON document
//! (missing fields fall back to their defaults).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::geo::GeoPoint;

/// Tunable constants for route synthesis.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use route_synth::SynthConfig;
///
/// let config = SynthConfig::default()
///     .with_latency(Duration::ZERO)
///     .with_alternatives(2, 2);
/// assert_eq!(config.latency(), Duration::ZERO);
/// assert!(config.validate().is_ok());
///
/// let parsed: SynthConfig = serde_json::from_str(r#"{"averageSpeedKmh": 60.0}"#).unwrap();
/// assert_eq!(parsed.average_speed_kmh, 60.0);
/// assert_eq!(parsed.latency_ms, 1500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthConfig {
    /// Simulated network latency before results are produced.
    pub latency_ms: u64,
    /// Fewest alternative routes per set.
    pub min_alternatives: usize,
    /// Most alternative routes per set.
    pub max_alternatives: usize,
    /// Lower bound of the origin→destination base distance (km).
    pub base_distance_km: f64,
    /// Width of the uniform spread added to the base distance (km).
    pub base_distance_spread_km: f64,
    /// Upper bound of the detour factor applied to alternatives.
    pub max_detour: f64,
    /// Constant average speed used for durations (km/h).
    pub average_speed_kmh: f64,
    /// Speed of the naive reference trip used for time saved (km/h).
    pub reference_speed_kmh: f64,
    /// Distance multiplier of the naive reference trip.
    pub reference_detour: f64,
    /// Lower bound of fuel consumption (L/km).
    pub fuel_rate_min: f64,
    /// Upper bound of fuel consumption (L/km).
    pub fuel_rate_max: f64,
    /// Fuel price per liter.
    pub fuel_price_per_liter: f64,
    /// Maintenance cost per km.
    pub maintenance_per_km: f64,
    /// Driver cost per hour.
    pub labor_per_hour: f64,
    /// Miscellaneous cost per km.
    pub other_per_km: f64,
    /// CO2 emitted per liter of fuel (kg).
    pub emission_factor: f64,
    /// Anchor point that toll plazas and rest stops are scattered around.
    pub toll_reference: GeoPoint,
    /// Coordinates given to an origin known only by name.
    pub default_origin: GeoPoint,
    /// Coordinates given to a destination known only by name.
    pub default_destination: GeoPoint,
    /// Cargo weight above which an oversize permit is required (tons).
    pub oversize_weight_tons: f64,
    /// Vehicle height above which an oversize permit is required (m).
    pub oversize_height_m: f64,
    /// Traffic weights over light, moderate, heavy.
    pub traffic_weights: ConditionWeights,
    /// Road quality weights over good, average, poor.
    pub road_quality_weights: ConditionWeights,
}

/// Relative weights of a three-level condition, best level first.
///
/// Weights are checked by the sampler when drawn, not by
/// [`SynthConfig::validate`]; a profile that cannot be sampled makes
/// generation fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionWeights {
    /// Weights for the recommended route.
    pub recommended: [f64; 3],
    /// Weights for alternative routes.
    pub alternative: [f64; 3],
}

impl ConditionWeights {
    /// The weights for a recommended or alternative route.
    pub fn for_route(&self, recommended: bool) -> &[f64; 3] {
        if recommended {
            &self.recommended
        } else {
            &self.alternative
        }
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            min_alternatives: 2,
            max_alternatives: 3,
            base_distance_km: 150.0,
            base_distance_spread_km: 40.0,
            max_detour: 0.3,
            average_speed_kmh: 55.0,
            reference_speed_kmh: 50.0,
            reference_detour: 1.15,
            fuel_rate_min: 0.08,
            fuel_rate_max: 0.12,
            fuel_price_per_liter: 100.0,
            maintenance_per_km: 2.0,
            labor_per_hour: 300.0,
            other_per_km: 1.5,
            emission_factor: 2.5,
            toll_reference: GeoPoint::new(28.4595, 77.0266),
            default_origin: GeoPoint::new(28.6139, 77.2090),
            default_destination: GeoPoint::new(27.1767, 78.0081),
            oversize_weight_tons: 20.0,
            oversize_height_m: 4.5,
            traffic_weights: ConditionWeights {
                recommended: [0.6, 0.3, 0.1],
                alternative: [0.3, 0.4, 0.3],
            },
            road_quality_weights: ConditionWeights {
                recommended: [0.7, 0.25, 0.05],
                alternative: [0.3, 0.5, 0.2],
            },
        }
    }
}

impl SynthConfig {
    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = latency.as_millis() as u64;
        self
    }

    /// Sets the inclusive range of alternative routes per set.
    pub fn with_alternatives(mut self, min: usize, max: usize) -> Self {
        self.min_alternatives = min;
        self.max_alternatives = max;
        self
    }

    /// Sets the anchor for toll plazas and rest stops.
    pub fn with_toll_reference(mut self, point: GeoPoint) -> Self {
        self.toll_reference = point;
        self
    }

    /// Sets the fallback origin and destination coordinates.
    pub fn with_default_endpoints(mut self, origin: GeoPoint, destination: GeoPoint) -> Self {
        self.default_origin = origin;
        self.default_destination = destination;
        self
    }

    /// Sets the oversize permit thresholds.
    pub fn with_permit_thresholds(mut self, weight_tons: f64, height_m: f64) -> Self {
        self.oversize_weight_tons = weight_tons;
        self.oversize_height_m = height_m;
        self
    }

    /// Simulated latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Checks that the configuration can drive the generator.
    pub fn validate(&self) -> SynthResult<()> {
        if self.min_alternatives > self.max_alternatives {
            return Err(SynthError::Config(format!(
                "min_alternatives ({}) exceeds max_alternatives ({})",
                self.min_alternatives, self.max_alternatives
            )));
        }
        if !(self.average_speed_kmh > 0.0) || !(self.reference_speed_kmh > 0.0) {
            return Err(SynthError::Config("speeds must be positive".into()));
        }
        if !(self.base_distance_km >= 0.0) || !(self.base_distance_spread_km >= 0.0) {
            return Err(SynthError::Config(
                "base distance and spread must be non-negative".into(),
            ));
        }
        if !(self.max_detour >= 0.0) {
            return Err(SynthError::Config("max_detour must be non-negative".into()));
        }
        if !(self.fuel_rate_min >= 0.0) || self.fuel_rate_min > self.fuel_rate_max {
            return Err(SynthError::Config(format!(
                "invalid fuel rate range [{}, {}]",
                self.fuel_rate_min, self.fuel_rate_max
            )));
        }
        for (name, point) in [
            ("toll_reference", self.toll_reference),
            ("default_origin", self.default_origin),
            ("default_destination", self.default_destination),
        ] {
            if !point.is_valid() {
                return Err(SynthError::Config(format!("{name} is not a valid coordinate")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SynthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.latency(), Duration::from_millis(1500));
        assert_eq!(config.min_alternatives, 2);
        assert_eq!(config.max_alternatives, 3);
    }

    #[test]
    fn test_inverted_alternatives_rejected() {
        let config = SynthConfig::default().with_alternatives(4, 2);
        assert!(matches!(config.validate(), Err(SynthError::Config(_))));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut config = SynthConfig::default();
        config.average_speed_kmh = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_distance_rejected() {
        let mut config = SynthConfig::default();
        config.base_distance_km = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_reference_point_rejected() {
        let config = SynthConfig::default().with_toll_reference(GeoPoint::new(120.0, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_condition_weights_by_role() {
        let config = SynthConfig::default();
        assert_eq!(config.traffic_weights.for_route(true), &[0.6, 0.3, 0.1]);
        assert_eq!(config.road_quality_weights.for_route(false), &[0.3, 0.5, 0.2]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SynthConfig =
            serde_json::from_str(r#"{"latencyMs": 0, "maxAlternatives": 5}"#).unwrap();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.max_alternatives, 5);
        assert_eq!(config.min_alternatives, 2);
        assert_eq!(config.labor_per_hour, 300.0);
    }
}
