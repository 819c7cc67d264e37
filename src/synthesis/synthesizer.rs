//! Route-set orchestrator.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SynthConfig;
use crate::error::{SynthError, SynthResult};
use crate::evaluation::{round_dp, MetricDraw, RouteConditions, RouteEvaluator};
use crate::generators::{generate_rest_stops, generate_route_restriction, generate_tolls};
use crate::geo::{encode_polyline, GeoPoint};
use crate::models::{
    toll_total, Endpoint, Location, LocationInput, Route, RouteRequest, TollInfo, Waypoint,
};
use crate::reference::ReferenceData;
use crate::sampling::{uniform, SamplingError};
use crate::segments::decompose;

const MIN_TOLLS: usize = 1;
const MAX_TOLLS: usize = 3;
const MIN_REST_STOPS: usize = 1;
const MAX_REST_STOPS: usize = 2;

/// Inputs shared by every route of one set.
struct SetContext<'a> {
    origin: &'a Location,
    destination: &'a Location,
    base_distance: f64,
    permits: &'a [String],
    evaluator: RouteEvaluator<'a>,
}

/// Synthesizes comparison sets of one recommended and several alternative
/// routes.
///
/// All randomness comes from the caller's RNG, so a seeded generator
/// reproduces a set exactly. The synthesizer holds no mutable state and can
/// serve overlapping requests.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_synth::models::{Location, RouteRequest};
/// use route_synth::reference::StaticReference;
/// use route_synth::synthesis::RouteSynthesizer;
///
/// let refs = StaticReference::new().with_location(Location::new("jp", "Jaipur", 26.91, 75.79));
/// let synth = RouteSynthesizer::default().with_reference(refs);
/// let request = RouteRequest::new("Jaipur", "Agra", "truck", 25.0);
///
/// let routes = synth.generate(&request, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(routes[0].origin.name, "Jaipur");
/// assert_eq!(routes[0].permits_required, ["Oversize Load Permit"]);
/// assert_eq!(routes.iter().filter(|r| r.is_recommended).count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RouteSynthesizer {
    config: SynthConfig,
    reference: Option<Arc<dyn ReferenceData>>,
}

impl RouteSynthesizer {
    /// Creates a synthesizer after validating `config`.
    pub fn new(config: SynthConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            reference: None,
        })
    }

    /// Resolves place names and vehicle types through `reference`.
    pub fn with_reference(mut self, reference: impl ReferenceData + 'static) -> Self {
        self.reference = Some(Arc::new(reference));
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Waits for the configured latency, then generates a set from a fresh
    /// OS-seeded RNG.
    ///
    /// Dropping the future before it completes abandons the call.
    pub async fn optimize_route(&self, request: &RouteRequest) -> SynthResult<Vec<Route>> {
        tokio::time::sleep(self.config.latency()).await;
        let mut rng = StdRng::from_os_rng();
        self.generate(request, &mut rng)
    }

    /// Waits for the configured latency, then generates a set from `seed`.
    pub async fn optimize_route_seeded(
        &self,
        request: &RouteRequest,
        seed: u64,
    ) -> SynthResult<Vec<Route>> {
        tokio::time::sleep(self.config.latency()).await;
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(request, &mut rng)
    }

    /// Waits for the configured latency, then generates a set from `rng`.
    pub async fn optimize_route_with_rng<R: Rng + ?Sized>(
        &self,
        request: &RouteRequest,
        rng: &mut R,
    ) -> SynthResult<Vec<Route>> {
        tokio::time::sleep(self.config.latency()).await;
        self.generate(request, rng)
    }

    /// JSON in, JSON out: parses a camelCase request, runs
    /// [`optimize_route`](Self::optimize_route) and serializes the routes.
    pub async fn optimize_route_json(&self, request_json: &str) -> SynthResult<String> {
        let request: RouteRequest = serde_json::from_str(request_json)?;
        let routes = self.optimize_route(&request).await?;
        serde_json::to_string(&routes).map_err(|cause| {
            tracing::error!(error = %cause, "failed to serialize route set");
            SynthError::OptimizationFailed
        })
    }

    /// Generates a route set immediately, without the simulated latency.
    ///
    /// Endpoint resolution errors are returned as they are; any failure after
    /// resolution is logged and reported as
    /// [`SynthError::OptimizationFailed`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &RouteRequest,
        rng: &mut R,
    ) -> SynthResult<Vec<Route>> {
        let origin = self.resolve_location(&request.origin, Endpoint::Origin)?;
        let destination = self.resolve_location(&request.destination, Endpoint::Destination)?;
        self.check_vehicle(&request.vehicle_type);

        tracing::info!(
            origin = %origin.name,
            destination = %destination.name,
            vehicle = %request.vehicle_type,
            weight = request.weight,
            "synthesizing route set"
        );

        let routes = self
            .synthesize_set(rng, request, &origin, &destination)
            .map_err(|cause| {
                tracing::error!(error = %cause, "route synthesis failed");
                SynthError::OptimizationFailed
            })?;

        tracing::info!(routes = routes.len(), "route set ready");
        Ok(routes)
    }

    /// Turns one endpoint of a request into a location.
    ///
    /// Structured locations are used as given. Names are looked up in the
    /// reference data when present; a name that is not found gets the
    /// configured default coordinates for its endpoint.
    pub fn resolve_location(
        &self,
        input: &LocationInput,
        endpoint: Endpoint,
    ) -> SynthResult<Location> {
        let name = match input {
            LocationInput::Location(location) => return validated(location.clone(), endpoint),
            LocationInput::Name(name) => name.trim(),
        };
        if name.is_empty() {
            return Err(unresolved(endpoint, "name is empty"));
        }

        if let Some(reference) = &self.reference {
            match reference.location(name) {
                Ok(Some(location)) => return validated(location, endpoint),
                Ok(None) => {
                    tracing::warn!(%endpoint, name, "location not found, using default coordinates")
                }
                Err(err) => return Err(unresolved(endpoint, err.to_string())),
            }
        }

        let point = match endpoint {
            Endpoint::Origin => self.config.default_origin,
            Endpoint::Destination => self.config.default_destination,
        };
        Ok(Location::at(endpoint.to_string(), name, point))
    }

    fn check_vehicle(&self, kind: &str) {
        let Some(reference) = &self.reference else {
            return;
        };
        match reference.vehicle(kind) {
            Ok(Some(_)) => {}
            Ok(None) => tracing::warn!(vehicle = kind, "unknown vehicle type"),
            Err(err) => tracing::warn!(vehicle = kind, error = %err, "vehicle lookup failed"),
        }
    }

    fn synthesize_set<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &RouteRequest,
        origin: &Location,
        destination: &Location,
    ) -> Result<Vec<Route>, SamplingError> {
        let cfg = &self.config;
        let evaluator = RouteEvaluator::new(cfg);
        let permits = evaluator.permits_required(request);
        let base_distance = cfg.base_distance_km + uniform(rng, 0.0, cfg.base_distance_spread_km);
        let alternatives = rng.random_range(cfg.min_alternatives..=cfg.max_alternatives);

        let ctx = SetContext {
            origin,
            destination,
            base_distance,
            permits: &permits,
            evaluator,
        };

        (0..=alternatives)
            .map(|index| self.synthesize_route(rng, &ctx, index))
            .collect()
    }

    fn synthesize_route<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ctx: &SetContext<'_>,
        index: usize,
    ) -> Result<Route, SamplingError> {
        let cfg = &self.config;
        let recommended = index == 0;

        let draw = MetricDraw::sample(rng, cfg, ctx.base_distance, recommended);
        let conditions = RouteConditions::sample(rng, cfg, recommended)?;

        let toll_count = rng.random_range(MIN_TOLLS..=MAX_TOLLS);
        let tolls = generate_tolls(rng, toll_count, cfg.toll_reference);
        let rest_count = rng.random_range(MIN_REST_STOPS..=MAX_REST_STOPS);
        let rest_stops = generate_rest_stops(rng, rest_count, cfg.toll_reference);
        let route_restriction = generate_route_restriction(rng, ctx.origin, ctx.destination);

        let metrics = ctx
            .evaluator
            .evaluate(&draw, &conditions, toll_total(&tolls));

        let mut waypoints: Vec<Waypoint> = tolls.iter().map(TollInfo::to_waypoint).collect();
        waypoints.extend(rest_stops);
        let mut restrictions = Vec::new();
        if let Some((restriction, marker)) = route_restriction {
            waypoints.push(marker);
            restrictions.push(restriction);
        }

        let segments = decompose(
            rng,
            ctx.origin,
            ctx.destination,
            &waypoints,
            metrics.distance,
            round_dp(metrics.duration * 60.0, 1),
        )?;

        let path: Vec<GeoPoint> = std::iter::once(ctx.origin.point())
            .chain(waypoints.iter().map(Waypoint::point))
            .chain(std::iter::once(ctx.destination.point()))
            .collect();

        let id = format!("route-{}", index + 1);
        let name = if recommended {
            "Recommended Route".to_string()
        } else {
            format!("Alternative Route {index}")
        };

        tracing::debug!(
            route = %id,
            distance = metrics.distance,
            total_cost = metrics.total_cost,
            segments = segments.len(),
            recommended,
            "synthesized route"
        );

        Ok(Route {
            id,
            name,
            distance: metrics.distance,
            duration: metrics.duration,
            total_cost: metrics.total_cost,
            cost_breakdown: metrics.cost_breakdown,
            fuel_consumption: metrics.fuel_consumption,
            emissions: metrics.emissions,
            safety_score: metrics.safety_score,
            reliability: metrics.reliability,
            origin: ctx.origin.clone(),
            destination: ctx.destination.clone(),
            waypoints,
            segments,
            tolls,
            weather: conditions.weather,
            weather_impact: conditions.weather.impact(),
            traffic: conditions.traffic,
            road_quality: conditions.road_quality,
            is_recommended: recommended,
            time_saved: metrics.time_saved,
            restrictions,
            permits_required: ctx.permits.to_vec(),
            polyline: encode_polyline(&path),
        })
    }
}

fn unresolved(endpoint: Endpoint, reason: impl Into<String>) -> SynthError {
    SynthError::LocationUnresolved {
        endpoint,
        reason: reason.into(),
    }
}

fn validated(location: Location, endpoint: Endpoint) -> SynthResult<Location> {
    if location.point().is_valid() {
        Ok(location)
    } else {
        Err(unresolved(
            endpoint,
            format!(
                "coordinates ({}, {}) of {} are out of range",
                location.lat, location.lng, location.name
            ),
        ))
    }
}

/// Generates a route set with the default configuration and no reference
/// data, after the simulated latency.
pub async fn optimize_route(request: &RouteRequest) -> SynthResult<Vec<Route>> {
    RouteSynthesizer::default().optimize_route(request).await
}
