//! Synthesized route and cost breakdown types.

use serde::{Deserialize, Serialize};

use super::{
    ImpactLevel, Location, Restriction, RoadQuality, RouteSegmentInfo, TollInfo, TrafficLevel,
    Waypoint, WeatherCondition,
};

/// Cost components of a route, each rounded to whole currency units.
///
/// The components are rounded independently, so their sum may differ from
/// [`Route::total_cost`] by a few units.
///
/// # Examples
///
/// ```
/// use route_synth::models::CostBreakdown;
///
/// let cost = CostBreakdown { fuel: 1680.0, tolls: 210.0, maintenance: 340.0, labor: 930.0, other: 255.0 };
/// assert_eq!(cost.sum(), 3415.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Fuel spend.
    pub fuel: f64,
    /// Toll charges.
    pub tolls: f64,
    /// Vehicle wear.
    pub maintenance: f64,
    /// Driver wages.
    pub labor: f64,
    /// Everything else.
    pub other: f64,
}

impl CostBreakdown {
    /// Sum of the five components.
    pub fn sum(&self) -> f64 {
        self.fuel + self.tolls + self.maintenance + self.labor + self.other
    }
}

/// One candidate itinerary in a comparison set, with every derived metric
/// the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Identifier, unique within its set.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Total length in km (whole number).
    pub distance: f64,
    /// Driving time in hours (one decimal).
    pub duration: f64,
    /// Total cost, rounded from the unrounded components.
    pub total_cost: f64,
    /// Rounded cost components.
    pub cost_breakdown: CostBreakdown,
    /// Fuel burned in liters.
    pub fuel_consumption: f64,
    /// CO2 emitted in kg.
    pub emissions: f64,
    /// Safety score in [25, 100].
    pub safety_score: u8,
    /// Reliability score in [25, 100].
    pub reliability: u8,
    /// Start of the route.
    pub origin: Location,
    /// End of the route.
    pub destination: Location,
    /// Points of interest in generation order.
    pub waypoints: Vec<Waypoint>,
    /// Legs between origin, waypoints and destination.
    pub segments: Vec<RouteSegmentInfo>,
    /// Toll plazas on the route.
    pub tolls: Vec<TollInfo>,
    /// Dominant weather.
    pub weather: WeatherCondition,
    /// Effect of the dominant weather.
    pub weather_impact: ImpactLevel,
    /// Aggregate traffic.
    pub traffic: TrafficLevel,
    /// Aggregate road quality.
    pub road_quality: RoadQuality,
    /// Whether this is the suggested route of its set.
    pub is_recommended: bool,
    /// Hours saved over a naive trip; zero unless recommended.
    pub time_saved: f64,
    /// Route-level restrictions.
    pub restrictions: Vec<Restriction>,
    /// Permits the trip requires.
    pub permits_required: Vec<String>,
    /// Encoded polyline through origin, waypoints and destination.
    pub polyline: String,
}

impl Route {
    /// Sum of segment distances in km.
    pub fn segment_distance(&self) -> f64 {
        self.segments.iter().map(|s| s.distance).sum()
    }

    /// Sum of segment durations in minutes.
    pub fn segment_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Sum of toll charges.
    pub fn toll_cost(&self) -> u32 {
        super::toll_total(&self.tolls)
    }

    /// Route-level and segment-level restrictions together.
    pub fn all_restrictions(&self) -> impl Iterator<Item = &Restriction> {
        self.restrictions
            .iter()
            .chain(self.segments.iter().flat_map(|s| s.restrictions.iter()))
    }
}
