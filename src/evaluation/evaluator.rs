//! Route metric evaluator: distance, duration, fuel, costs, emissions,
//! scores, time saved and permits.

use rand::Rng;

use crate::config::SynthConfig;
use crate::models::{CostBreakdown, RoadQuality, RouteRequest, TrafficLevel, WeatherCondition};
use crate::sampling::{uniform, weighted_choice, SamplingError};

use super::scores::{reliability_score, safety_score};

/// Permit label required for heavy or tall loads.
pub const OVERSIZE_LOAD_PERMIT: &str = "Oversize Load Permit";

/// Rounds `value` to `decimals` decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use route_synth::evaluation::round_dp;
///
/// assert_eq!(round_dp(2.909, 1), 2.9);
/// assert_eq!(round_dp(172.5, 0), 173.0);
/// ```
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Route-level categorical conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConditions {
    /// Dominant weather.
    pub weather: WeatherCondition,
    /// Aggregate traffic.
    pub traffic: TrafficLevel,
    /// Aggregate road surface.
    pub road_quality: RoadQuality,
}

impl RouteConditions {
    /// Samples conditions; recommended routes lean toward lighter traffic and
    /// better roads.
    ///
    /// Weather is uniform over clear, rain and fog. Traffic and road quality
    /// use the configured weight profiles; by default traffic (light,
    /// moderate, heavy) is weighted 0.6/0.3/0.1 when recommended and
    /// 0.3/0.4/0.3 otherwise, road quality (good, average, poor)
    /// 0.7/0.25/0.05 and 0.3/0.5/0.2.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        config: &SynthConfig,
        recommended: bool,
    ) -> Result<Self, SamplingError> {
        let weather = WeatherCondition::ALL[rng.random_range(0..WeatherCondition::ALL.len())];
        let traffic = *weighted_choice(
            rng,
            &TrafficLevel::ALL,
            config.traffic_weights.for_route(recommended),
        )?;
        let road_quality = *weighted_choice(
            rng,
            &RoadQuality::BEST_FIRST,
            config.road_quality_weights.for_route(recommended),
        )?;
        Ok(Self {
            weather,
            traffic,
            road_quality,
        })
    }
}

/// The continuous random inputs of one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDraw {
    /// Origin→destination base distance shared by the set (km).
    pub base_distance: f64,
    /// Distance multiplier: 1.0 when recommended, else in [1, 1 + max_detour).
    pub detour: f64,
    /// Fuel consumption (L/km).
    pub fuel_rate: f64,
    /// Whether the route is the recommended one.
    pub recommended: bool,
}

impl MetricDraw {
    /// Draws the detour and fuel rate for a route.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        config: &SynthConfig,
        base_distance: f64,
        recommended: bool,
    ) -> Self {
        let detour = if recommended {
            1.0
        } else {
            1.0 + uniform(rng, 0.0, config.max_detour)
        };
        let fuel_rate = uniform(rng, config.fuel_rate_min, config.fuel_rate_max);
        Self {
            base_distance,
            detour,
            fuel_rate,
            recommended,
        }
    }
}

/// Every numeric field derived for a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    /// Whole km.
    pub distance: f64,
    /// Hours, one decimal.
    pub duration: f64,
    /// Liters, one decimal.
    pub fuel_consumption: f64,
    /// kg CO2, one decimal.
    pub emissions: f64,
    /// Individually rounded cost components.
    pub cost_breakdown: CostBreakdown,
    /// Rounded sum of the unrounded components.
    pub total_cost: f64,
    /// Safety score in [25, 100].
    pub safety_score: u8,
    /// Reliability score in [25, 100].
    pub reliability: u8,
    /// Hours saved; zero unless recommended.
    pub time_saved: f64,
}

/// Derives route metrics from sampled inputs with fixed formulas.
///
/// Duration depends on distance alone: traffic is scored but never slows the
/// route down.
///
/// # Examples
///
/// ```
/// use route_synth::SynthConfig;
/// use route_synth::evaluation::{MetricDraw, RouteConditions, RouteEvaluator};
/// use route_synth::models::{RoadQuality, TrafficLevel, WeatherCondition};
///
/// let config = SynthConfig::default();
/// let evaluator = RouteEvaluator::new(&config);
/// let draw = MetricDraw { base_distance: 160.0, detour: 1.0, fuel_rate: 0.1, recommended: true };
/// let conditions = RouteConditions {
///     weather: WeatherCondition::Clear,
///     traffic: TrafficLevel::Light,
///     road_quality: RoadQuality::Good,
/// };
///
/// let m = evaluator.evaluate(&draw, &conditions, 150);
/// assert_eq!(m.distance, 160.0);
/// assert_eq!(m.duration, 2.9);
/// assert_eq!(m.total_cost, 3180.0);
/// assert_eq!(m.safety_score, 83);
/// ```
pub struct RouteEvaluator<'a> {
    config: &'a SynthConfig,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given constants.
    pub fn new(config: &'a SynthConfig) -> Self {
        Self { config }
    }

    /// Computes all metrics of one route.
    pub fn evaluate(
        &self,
        draw: &MetricDraw,
        conditions: &RouteConditions,
        toll_total: u32,
    ) -> RouteMetrics {
        let cfg = self.config;

        let distance = (draw.base_distance * draw.detour).round();
        let duration = round_dp(distance / cfg.average_speed_kmh, 1);
        let fuel_consumption = round_dp(distance * draw.fuel_rate, 1);

        let fuel_cost = fuel_consumption * cfg.fuel_price_per_liter;
        let toll_cost = f64::from(toll_total);
        let maintenance_cost = distance * cfg.maintenance_per_km;
        let labor_cost = duration * cfg.labor_per_hour;
        let other_cost = distance * cfg.other_per_km;
        let total_cost =
            (fuel_cost + toll_cost + maintenance_cost + labor_cost + other_cost).round();

        let cost_breakdown = CostBreakdown {
            fuel: fuel_cost.round(),
            tolls: toll_cost,
            maintenance: maintenance_cost.round(),
            labor: labor_cost.round(),
            other: other_cost.round(),
        };

        let time_saved = if draw.recommended {
            round_dp(
                draw.base_distance * cfg.reference_detour / cfg.reference_speed_kmh - duration,
                1,
            )
        } else {
            0.0
        };

        RouteMetrics {
            distance,
            duration,
            fuel_consumption,
            emissions: round_dp(fuel_consumption * cfg.emission_factor, 1),
            cost_breakdown,
            total_cost,
            safety_score: safety_score(conditions, draw.recommended),
            reliability: reliability_score(conditions, draw.recommended),
            time_saved,
        }
    }

    /// Permits the request needs: an oversize permit when the cargo weight or
    /// the vehicle height exceeds its threshold.
    pub fn permits_required(&self, request: &RouteRequest) -> Vec<String> {
        let heavy = request.weight > self.config.oversize_weight_tons;
        let tall = request
            .height()
            .is_some_and(|h| h > self.config.oversize_height_m);
        if heavy || tall {
            vec![OVERSIZE_LOAD_PERMIT.to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimensions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn clear() -> RouteConditions {
        RouteConditions {
            weather: WeatherCondition::Clear,
            traffic: TrafficLevel::Light,
            road_quality: RoadQuality::Good,
        }
    }

    #[test]
    fn test_recommended_metrics() {
        let config = SynthConfig::default();
        let eval = RouteEvaluator::new(&config);
        let draw = MetricDraw {
            base_distance: 160.0,
            detour: 1.0,
            fuel_rate: 0.1,
            recommended: true,
        };
        let m = eval.evaluate(&draw, &clear(), 150);
        assert_eq!(m.distance, 160.0);
        assert_eq!(m.duration, 2.9);
        assert_eq!(m.fuel_consumption, 16.0);
        assert_eq!(m.emissions, 40.0);
        assert_eq!(
            m.cost_breakdown,
            CostBreakdown {
                fuel: 1600.0,
                tolls: 150.0,
                maintenance: 320.0,
                labor: 870.0,
                other: 240.0,
            }
        );
        assert_eq!(m.total_cost, 3180.0);
        assert_eq!(m.reliability, 90);
        // 160 * 1.15 / 50 = 3.68, minus 2.9
        assert_eq!(m.time_saved, 0.8);
    }

    #[test]
    fn test_alternative_has_no_time_saved() {
        let config = SynthConfig::default();
        let eval = RouteEvaluator::new(&config);
        let draw = MetricDraw {
            base_distance: 170.0,
            detour: 1.2,
            fuel_rate: 0.09,
            recommended: false,
        };
        let m = eval.evaluate(&draw, &clear(), 0);
        assert_eq!(m.distance, 204.0);
        assert_eq!(m.duration, 3.7);
        assert_eq!(m.time_saved, 0.0);
        assert_eq!(m.safety_score, 75);
    }

    #[test]
    fn test_total_cost_uses_unrounded_components() {
        let config = SynthConfig::default();
        let eval = RouteEvaluator::new(&config);
        let draw = MetricDraw {
            base_distance: 151.0,
            detour: 1.0,
            fuel_rate: 0.083,
            recommended: false,
        };
        let m = eval.evaluate(&draw, &clear(), 99);
        let fuel = m.fuel_consumption * 100.0;
        let raw = fuel + 99.0 + m.distance * 2.0 + m.duration * 300.0 + m.distance * 1.5;
        assert_eq!(m.total_cost, raw.round());
        assert!((m.cost_breakdown.sum() - m.total_cost).abs() <= 3.0);
    }

    #[test]
    fn test_draw_bounds() {
        let config = SynthConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let rec = MetricDraw::sample(&mut rng, &config, 170.0, true);
            assert_eq!(rec.detour, 1.0);
            let alt = MetricDraw::sample(&mut rng, &config, 170.0, false);
            assert!((1.0..1.3).contains(&alt.detour));
            assert!((0.08..0.12).contains(&alt.fuel_rate));
        }
    }

    #[test]
    fn test_recommended_conditions_skew_better() {
        let config = SynthConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let heavy = |rng: &mut StdRng, rec: bool| {
            (0..4000)
                .filter(|_| {
                    RouteConditions::sample(rng, &config, rec).unwrap().traffic
                        == TrafficLevel::Heavy
                })
                .count()
        };
        let rec_heavy = heavy(&mut rng, true);
        let alt_heavy = heavy(&mut rng, false);
        assert!(rec_heavy < alt_heavy, "{rec_heavy} vs {alt_heavy}");
    }

    #[test]
    fn test_unsampleable_profile_errors() {
        let mut config = SynthConfig::default();
        config.road_quality_weights.alternative = [0.0, 0.0, 0.0];
        let mut rng = StdRng::seed_from_u64(42);
        assert!(RouteConditions::sample(&mut rng, &config, true).is_ok());
        assert_eq!(
            RouteConditions::sample(&mut rng, &config, false),
            Err(SamplingError::ZeroTotal)
        );
    }

    #[test]
    fn test_permits() {
        let config = SynthConfig::default();
        let eval = RouteEvaluator::new(&config);

        let heavy = RouteRequest::new("A", "B", "truck", 25.0);
        assert_eq!(eval.permits_required(&heavy), vec![OVERSIZE_LOAD_PERMIT]);

        let light = RouteRequest::new("A", "B", "truck", 5.0);
        assert!(eval.permits_required(&light).is_empty());

        let tall = RouteRequest::new("A", "B", "truck", 5.0).with_dimensions(Dimensions {
            height: Some(4.8),
            ..Dimensions::default()
        });
        assert_eq!(eval.permits_required(&tall), vec![OVERSIZE_LOAD_PERMIT]);

        let at_limit = RouteRequest::new("A", "B", "truck", 20.0).with_dimensions(Dimensions {
            height: Some(4.5),
            ..Dimensions::default()
        });
        assert!(eval.permits_required(&at_limit).is_empty());
    }
}
