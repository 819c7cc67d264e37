//! Route segment types.

use serde::{Deserialize, Serialize};

use super::{
    ImpactLevel, Location, Restriction, RoadQuality, RoadType, SegmentTrafficLevel,
    WeatherCondition,
};

/// Weather sampled for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentWeather {
    /// Condition on the segment.
    pub condition: WeatherCondition,
    /// Effect on driving.
    pub impact: ImpactLevel,
}

/// Traffic sampled for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTraffic {
    /// Congestion level.
    pub level: SegmentTrafficLevel,
    /// Expected delay in whole minutes.
    pub delay_minutes: u32,
}

/// One leg of a route between two consecutive points.
///
/// The segments of a route partition its distance and duration; the last
/// segment carries whatever the equal shares of the others leave over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegmentInfo {
    /// Where the leg begins.
    pub start: Location,
    /// Where the leg ends.
    pub end: Location,
    /// Length in km.
    pub distance: f64,
    /// Driving time in minutes.
    pub duration: f64,
    /// Road classification.
    pub road_type: RoadType,
    /// Surface quality.
    pub road_quality: RoadQuality,
    /// Weather on this leg.
    pub weather: SegmentWeather,
    /// Traffic on this leg.
    pub traffic: SegmentTraffic,
    /// Restrictions specific to this leg.
    pub restrictions: Vec<Restriction>,
}
