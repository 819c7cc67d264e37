//! Domain model types for route synthesis.
//!
//! Provides the request a planner submits, the synthesized routes with their
//! segments, tolls, waypoints and restrictions, the categorical conditions
//! sampled for them, and the reference records (vehicles, fuel prices, toll
//! plazas) behind the dashboard's lookup tables.

mod conditions;
mod location;
mod request;
mod restriction;
mod route;
mod segment;
mod tables;
mod toll;
mod vehicle;
mod waypoint;

pub use conditions::{
    ImpactLevel, RoadQuality, RoadType, SegmentTrafficLevel, TrafficLevel, WeatherCondition,
};
pub use location::Location;
pub use request::{Dimensions, Endpoint, LocationInput, RoutePreferences, RouteRequest};
pub use restriction::{Restriction, RestrictionKind};
pub use route::{CostBreakdown, Route};
pub use segment::{RouteSegmentInfo, SegmentTraffic, SegmentWeather};
pub use tables::{FuelPrice, TollPlaza};
pub use toll::{toll_total, TollInfo};
pub use vehicle::Vehicle;
pub use waypoint::{Waypoint, WaypointKind};
