//! Safety and reliability scoring.
//!
//! Both scores start from a base value, lose points for adverse weather,
//! traffic and road surface, gain a bonus on the recommended route, and are
//! clamped to [25, 100].

use crate::models::{RoadQuality, TrafficLevel, WeatherCondition};

use super::RouteConditions;

const MIN_SCORE: i32 = 25;
const MAX_SCORE: i32 = 100;

const SAFETY_BASE: i32 = 75;
const SAFETY_RECOMMENDED_BONUS: i32 = 8;
const RELIABILITY_BASE: i32 = 80;
const RELIABILITY_RECOMMENDED_BONUS: i32 = 10;

fn safety_adjustment(conditions: &RouteConditions) -> i32 {
    let weather = match conditions.weather {
        WeatherCondition::Clear => 0,
        WeatherCondition::Rain => -5,
        WeatherCondition::Fog => -15,
    };
    let traffic = match conditions.traffic {
        TrafficLevel::Light => 0,
        TrafficLevel::Moderate => -3,
        TrafficLevel::Heavy => -8,
    };
    let road = match conditions.road_quality {
        RoadQuality::Good => 0,
        RoadQuality::Average => -5,
        RoadQuality::Poor => -12,
    };
    weather + traffic + road
}

fn reliability_adjustment(conditions: &RouteConditions) -> i32 {
    let weather = match conditions.weather {
        WeatherCondition::Clear => 0,
        WeatherCondition::Rain => -3,
        WeatherCondition::Fog => -10,
    };
    let traffic = match conditions.traffic {
        TrafficLevel::Light => 0,
        TrafficLevel::Moderate => -5,
        TrafficLevel::Heavy => -15,
    };
    let road = match conditions.road_quality {
        RoadQuality::Good => 0,
        RoadQuality::Average => -3,
        RoadQuality::Poor => -8,
    };
    weather + traffic + road
}

fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Safety score in [25, 100].
///
/// # Examples
///
/// ```
/// use route_synth::evaluation::{safety_score, RouteConditions};
/// use route_synth::models::{RoadQuality, TrafficLevel, WeatherCondition};
///
/// let clear = RouteConditions {
///     weather: WeatherCondition::Clear,
///     traffic: TrafficLevel::Light,
///     road_quality: RoadQuality::Good,
/// };
/// assert_eq!(safety_score(&clear, true), 83);
/// assert_eq!(safety_score(&clear, false), 75);
/// ```
pub fn safety_score(conditions: &RouteConditions, recommended: bool) -> u8 {
    let bonus = if recommended { SAFETY_RECOMMENDED_BONUS } else { 0 };
    clamp_score(SAFETY_BASE + safety_adjustment(conditions) + bonus)
}

/// Reliability score in [25, 100].
pub fn reliability_score(conditions: &RouteConditions, recommended: bool) -> u8 {
    let bonus = if recommended {
        RELIABILITY_RECOMMENDED_BONUS
    } else {
        0
    };
    clamp_score(RELIABILITY_BASE + reliability_adjustment(conditions) + bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(
        weather: WeatherCondition,
        traffic: TrafficLevel,
        road_quality: RoadQuality,
    ) -> RouteConditions {
        RouteConditions {
            weather,
            traffic,
            road_quality,
        }
    }

    #[test]
    fn test_worst_case() {
        let worst = conditions(WeatherCondition::Fog, TrafficLevel::Heavy, RoadQuality::Poor);
        assert_eq!(safety_score(&worst, false), 40);
        assert_eq!(reliability_score(&worst, false), 47);
        assert_eq!(safety_score(&worst, true), 48);
        assert_eq!(reliability_score(&worst, true), 57);
    }

    #[test]
    fn test_best_case() {
        let best = conditions(WeatherCondition::Clear, TrafficLevel::Light, RoadQuality::Good);
        assert_eq!(reliability_score(&best, true), 90);
        assert_eq!(reliability_score(&best, false), 80);
    }

    #[test]
    fn test_mixed() {
        let c = conditions(WeatherCondition::Rain, TrafficLevel::Moderate, RoadQuality::Average);
        // 75 - 5 - 3 - 5
        assert_eq!(safety_score(&c, false), 62);
        // 80 - 3 - 5 - 3
        assert_eq!(reliability_score(&c, false), 69);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_score(-40), 25);
        assert_eq!(clamp_score(140), 100);
        assert_eq!(clamp_score(60), 60);
    }

    #[test]
    fn test_every_combination_in_range() {
        for weather in WeatherCondition::ALL {
            for traffic in TrafficLevel::ALL {
                for road in RoadQuality::BEST_FIRST {
                    for recommended in [false, true] {
                        let c = conditions(weather, traffic, road);
                        let s = safety_score(&c, recommended);
                        let r = reliability_score(&c, recommended);
                        assert!((25..=100).contains(&s));
                        assert!((25..=100).contains(&r));
                    }
                }
            }
        }
    }

    #[test]
    fn test_recommended_never_worse() {
        for weather in WeatherCondition::ALL {
            for traffic in TrafficLevel::ALL {
                for road in RoadQuality::BEST_FIRST {
                    let c = conditions(weather, traffic, road);
                    assert!(safety_score(&c, true) >= safety_score(&c, false));
                    assert!(reliability_score(&c, true) >= reliability_score(&c, false));
                }
            }
        }
    }
}
