//! Rest stop generator.

use rand::Rng;

use crate::geo::GeoPoint;
use crate::models::{Waypoint, WaypointKind};
use crate::sampling::uniform;

const FACILITIES: &str = "Facilities: Food, Restrooms, Parking";
const MAX_OFFSET_DEG: f64 = 0.5;

/// Generates `count` rest-stop waypoints scattered around `reference`.
pub fn generate_rest_stops<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    reference: GeoPoint,
) -> Vec<Waypoint> {
    (1..=count)
        .map(|n| {
            let point = reference.offset(
                uniform(rng, 0.0, MAX_OFFSET_DEG),
                uniform(rng, 0.0, MAX_OFFSET_DEG),
            );
            Waypoint::new(
                format!("rest-{n}"),
                format!("Rest Stop {n}"),
                WaypointKind::Rest,
                point,
                FACILITIES,
            )
        })
        .collect()
}
