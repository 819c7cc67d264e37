//! Categorical road, weather and traffic conditions.

use serde::{Deserialize, Serialize};

/// Prevailing weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// Clear skies.
    Clear,
    /// Rain.
    Rain,
    /// Fog.
    Fog,
}

impl WeatherCondition {
    /// All conditions, in sampling order.
    pub const ALL: [WeatherCondition; 3] = [
        WeatherCondition::Clear,
        WeatherCondition::Rain,
        WeatherCondition::Fog,
    ];

    /// Route-level impact: Clear→none, Rain→medium, Fog→high.
    pub fn impact(self) -> ImpactLevel {
        match self {
            WeatherCondition::Clear => ImpactLevel::None,
            WeatherCondition::Rain => ImpactLevel::Medium,
            WeatherCondition::Fog => ImpactLevel::High,
        }
    }
}

/// How strongly weather affects driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// No effect.
    None,
    /// Noticeable slowdown.
    Medium,
    /// Severe slowdown.
    High,
}

/// Aggregate traffic on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    /// Free flowing.
    Light,
    /// Some congestion.
    Moderate,
    /// Congested.
    Heavy,
}

impl TrafficLevel {
    /// All levels, lightest first.
    pub const ALL: [TrafficLevel; 3] = [
        TrafficLevel::Light,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
    ];
}

/// Traffic on a single segment.
///
/// Segment traffic uses its own scale; it is not comparable with
/// [`TrafficLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentTrafficLevel {
    /// No delay.
    Light,
    /// Up to 10 minutes of delay.
    Medium,
    /// 10 to 30 minutes of delay.
    High,
}

impl SegmentTrafficLevel {
    /// All levels, lightest first.
    pub const ALL: [SegmentTrafficLevel; 3] = [
        SegmentTrafficLevel::Light,
        SegmentTrafficLevel::Medium,
        SegmentTrafficLevel::High,
    ];
}

/// Road surface quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadQuality {
    /// Poor surface.
    Poor,
    /// Average surface.
    Average,
    /// Good surface.
    Good,
}

impl RoadQuality {
    /// Route-level sampling order: good, average, poor.
    pub const BEST_FIRST: [RoadQuality; 3] =
        [RoadQuality::Good, RoadQuality::Average, RoadQuality::Poor];
}

/// Road classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadType {
    /// National highway.
    #[serde(rename = "National Highway")]
    NationalHighway,
    /// State highway.
    #[serde(rename = "State Highway")]
    StateHighway,
    /// Rural road.
    #[serde(rename = "Rural Road")]
    RuralRoad,
    /// Urban road.
    #[serde(rename = "Urban Road")]
    UrbanRoad,
}

impl RoadType {
    /// All road types, in sampling order.
    pub const ALL: [RoadType; 4] = [
        RoadType::NationalHighway,
        RoadType::StateHighway,
        RoadType::RuralRoad,
        RoadType::UrbanRoad,
    ];

    /// The three equally likely surface qualities for this road type.
    pub fn quality_table(self) -> [RoadQuality; 3] {
        use RoadQuality::*;
        match self {
            RoadType::NationalHighway => [Good, Good, Average],
            RoadType::StateHighway => [Good, Average, Average],
            RoadType::RuralRoad => [Average, Poor, Poor],
            RoadType::UrbanRoad => [Good, Average, Poor],
        }
    }
}
