//! Per-segment condition sampling.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generators::describe_restriction;
use crate::models::{
    ImpactLevel, Location, Restriction, RestrictionKind, RoadQuality, RoadType, SegmentTraffic,
    SegmentTrafficLevel, SegmentWeather, WeatherCondition,
};
use crate::sampling::{chance, uniform, weighted_choice, SamplingError};

const ROAD_TYPE_WEIGHTS: [f64; 4] = [0.6, 0.25, 0.1, 0.05];
const WEATHER_WEIGHTS: [f64; 3] = [0.7, 0.2, 0.1];
const TRAFFIC_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];
const RESTRICTION_RATE: f64 = 0.2;

/// Road type: National 0.6, State 0.25, Rural 0.1, Urban 0.05.
pub fn sample_road_type<R: Rng + ?Sized>(rng: &mut R) -> Result<RoadType, SamplingError> {
    weighted_choice(rng, &RoadType::ALL, &ROAD_TYPE_WEIGHTS).copied()
}

/// Uniform pick from the road type's quality table.
pub fn sample_road_quality<R: Rng + ?Sized>(rng: &mut R, road_type: RoadType) -> RoadQuality {
    let table = road_type.quality_table();
    table[rng.random_range(0..table.len())]
}

/// Clear 0.7, Rain 0.2, Fog 0.1; non-clear weather has medium or high impact
/// with equal odds.
pub fn sample_weather<R: Rng + ?Sized>(rng: &mut R) -> Result<SegmentWeather, SamplingError> {
    let condition = *weighted_choice(rng, &WeatherCondition::ALL, &WEATHER_WEIGHTS)?;
    let impact = match condition {
        WeatherCondition::Clear => ImpactLevel::None,
        _ if chance(rng, 0.5) => ImpactLevel::Medium,
        _ => ImpactLevel::High,
    };
    Ok(SegmentWeather { condition, impact })
}

/// Light 0.5, medium 0.3, high 0.2, with delays of 0, [0, 10) and [10, 30)
/// minutes rounded to the nearest minute.
pub fn sample_traffic<R: Rng + ?Sized>(rng: &mut R) -> Result<SegmentTraffic, SamplingError> {
    let level = *weighted_choice(rng, &SegmentTrafficLevel::ALL, &TRAFFIC_WEIGHTS)?;
    let delay = match level {
        SegmentTrafficLevel::Light => 0.0,
        SegmentTrafficLevel::Medium => uniform(rng, 0.0, 10.0),
        SegmentTrafficLevel::High => uniform(rng, 10.0, 30.0),
    };
    Ok(SegmentTraffic {
        level,
        delay_minutes: delay.round() as u32,
    })
}

/// With probability 0.2, one restriction of a random kind located at the
/// segment midpoint.
pub fn sample_segment_restriction<R: Rng + ?Sized>(
    rng: &mut R,
    segment_number: usize,
    start: &Location,
    end: &Location,
) -> Option<Restriction> {
    if !chance(rng, RESTRICTION_RATE) {
        return None;
    }
    let kind = *RestrictionKind::ALL.choose(rng)?;
    let (value, description) = describe_restriction(rng, kind);
    let id = format!("segment-{segment_number}-restriction");
    let midpoint = start.point().midpoint(end.point());
    Some(Restriction {
        location: Some(Location::at(
            id.clone(),
            format!("{kind} Restriction"),
            midpoint,
        )),
        id,
        kind,
        value,
        description,
    })
}
