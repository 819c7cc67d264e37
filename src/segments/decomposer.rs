//! Splits a route into segments between its ordered points.

use rand::Rng;

use super::conditions::{
    sample_road_quality, sample_road_type, sample_segment_restriction, sample_traffic,
    sample_weather,
};
use crate::evaluation::round_dp;
use crate::models::{Location, RouteSegmentInfo, Waypoint};
use crate::sampling::SamplingError;

/// A point a route passes through, ranked for ordering.
enum RoutePoint<'a> {
    Origin(&'a Location),
    Stop(&'a Waypoint),
    Destination(&'a Location),
}

impl RoutePoint<'_> {
    fn rank(&self) -> u8 {
        match self {
            RoutePoint::Origin(_) => 0,
            RoutePoint::Stop(_) => 1,
            RoutePoint::Destination(_) => 2,
        }
    }

    fn to_location(&self) -> Location {
        match self {
            RoutePoint::Origin(loc) | RoutePoint::Destination(loc) => (*loc).clone(),
            RoutePoint::Stop(wp) => wp.to_location(),
        }
    }
}

/// Decomposes a route into consecutive segments.
///
/// The origin is forced first and the destination last; waypoints keep their
/// insertion order in between, so consecutive legs may backtrack on a map.
/// With `p` segments, each of the first `p - 1` receives `1/p` of the total
/// distance (km) and duration (minutes), rounded to one decimal, and the last
/// receives what remains, never less than zero. Every segment samples its own
/// road type, road quality, weather, traffic and optional restriction.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use route_synth::models::Location;
/// use route_synth::segments::decompose;
///
/// let origin = Location::new("o", "Delhi", 28.61, 77.21);
/// let destination = Location::new("d", "Agra", 27.18, 78.01);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let segments = decompose(&mut rng, &origin, &destination, &[], 180.0, 198.0).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].distance, 180.0);
/// assert_eq!(segments[0].duration, 198.0);
/// ```
pub fn decompose<R: Rng + ?Sized>(
    rng: &mut R,
    origin: &Location,
    destination: &Location,
    waypoints: &[Waypoint],
    total_distance: f64,
    total_duration: f64,
) -> Result<Vec<RouteSegmentInfo>, SamplingError> {
    let mut points = Vec::with_capacity(waypoints.len() + 2);
    points.push(RoutePoint::Origin(origin));
    points.extend(waypoints.iter().map(RoutePoint::Stop));
    points.push(RoutePoint::Destination(destination));
    // stable: interior order is insertion order
    points.sort_by_key(RoutePoint::rank);

    let locations: Vec<Location> = points.iter().map(RoutePoint::to_location).collect();
    let count = locations.len() - 1;
    let distance_share = round_dp(total_distance / count as f64, 1);
    let duration_share = round_dp(total_duration / count as f64, 1);

    let mut segments = Vec::with_capacity(count);
    let mut assigned_distance = 0.0;
    let mut assigned_duration = 0.0;

    for (i, pair) in locations.windows(2).enumerate() {
        let (start, end) = (&pair[0], &pair[1]);
        let is_last = i + 1 == count;

        let (distance, duration) = if is_last {
            (
                round_dp((total_distance - assigned_distance).max(0.0), 1),
                round_dp((total_duration - assigned_duration).max(0.0), 1),
            )
        } else {
            (distance_share, duration_share)
        };
        assigned_distance += distance;
        assigned_duration += duration;

        let road_type = sample_road_type(rng)?;
        let road_quality = sample_road_quality(rng, road_type);
        let weather = sample_weather(rng)?;
        let traffic = sample_traffic(rng)?;
        let restrictions = sample_segment_restriction(rng, i + 1, start, end)
            .into_iter()
            .collect();

        segments.push(RouteSegmentInfo {
            start: start.clone(),
            end: end.clone(),
            distance,
            duration,
            road_type,
            road_quality,
            weather,
            traffic,
            restrictions,
        });
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::models::WaypointKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn endpoints() -> (Location, Location) {
        (
            Location::new("o", "Origin", 28.6, 77.2),
            Location::new("d", "Destination", 27.2, 78.0),
        )
    }

    fn stop(id: &str, kind: WaypointKind) -> Waypoint {
        Waypoint::new(id, id, kind, GeoPoint::new(28.0, 77.5), "")
    }

    #[test]
    fn test_no_waypoints_single_segment() {
        let (o, d) = endpoints();
        let mut rng = StdRng::seed_from_u64(42);
        let segs = decompose(&mut rng, &o, &d, &[], 173.0, 189.0).unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].start, o);
        assert_eq!(segs[0].end, d);
        assert_eq!(segs[0].distance, 173.0);
        assert_eq!(segs[0].duration, 189.0);
    }

    #[test]
    fn test_interior_order_preserved() {
        let (o, d) = endpoints();
        let stops = [
            stop("rest-1", WaypointKind::Rest),
            stop("toll-1", WaypointKind::Toll),
            stop("restriction-1", WaypointKind::Restriction),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let segs = decompose(&mut rng, &o, &d, &stops, 200.0, 216.0).unwrap();
        let path: Vec<_> = std::iter::once(segs[0].start.id.as_str())
            .chain(segs.iter().map(|s| s.end.id.as_str()))
            .collect();
        assert_eq!(path, ["o", "rest-1", "toll-1", "restriction-1", "d"]);
    }

    #[test]
    fn test_equal_shares_and_remainder() {
        let (o, d) = endpoints();
        let stops = [stop("a", WaypointKind::Toll), stop("b", WaypointKind::Rest)];
        let mut rng = StdRng::seed_from_u64(42);
        let segs = decompose(&mut rng, &o, &d, &stops, 100.0, 110.0).unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].distance, 33.3);
        assert_eq!(segs[1].distance, 33.3);
        assert!((segs[2].distance - 33.4).abs() < 1e-9);
        assert_eq!(segs[0].duration, 36.7);
        assert!((segs[2].duration - 36.6).abs() < 1e-9);

        let total_d: f64 = segs.iter().map(|s| s.distance).sum();
        let total_t: f64 = segs.iter().map(|s| s.duration).sum();
        assert!((total_d - 100.0).abs() < 1e-9);
        assert!((total_t - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_segment_never_negative() {
        let (o, d) = endpoints();
        let stops: Vec<_> = (0..9).map(|i| stop(&format!("s{i}"), WaypointKind::Rest)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        // nine shares of 0.1 overshoot a total of 0.5
        let segs = decompose(&mut rng, &o, &d, &stops, 0.5, 0.0).unwrap();
        assert_eq!(segs.len(), 10);
        assert_eq!(segs[9].distance, 0.0);
        assert!(segs.iter().all(|s| s.duration == 0.0));
    }

    #[test]
    fn test_segments_chain() {
        let (o, d) = endpoints();
        let stops = [stop("x", WaypointKind::Toll), stop("y", WaypointKind::Toll)];
        let mut rng = StdRng::seed_from_u64(8);
        let segs = decompose(&mut rng, &o, &d, &stops, 150.0, 162.0).unwrap();
        for pair in segs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
