//! Restriction generators.

use rand::Rng;

use crate::models::{Location, Restriction, RestrictionKind, Waypoint, WaypointKind};
use crate::sampling::{chance, uniform};

/// Probability that a route carries a route-level restriction.
const ROUTE_RESTRICTION_RATE: f64 = 0.3;
/// Fraction of the origin→destination line where it is placed.
const ROUTE_RESTRICTION_POSITION: f64 = 0.6;

/// Draws a kind-specific limit and its description.
///
/// | Kind   | Value                               |
/// |--------|-------------------------------------|
/// | weight | `"{10..=40} tons"`                  |
/// | height | `"{3.5..5.0} m"`                    |
/// | width  | `"{2.5..3.5} m"`                    |
/// | length | `"{12..=20} m"`                     |
/// | time   | `"No entry {06..=09}:00 - {18..=22}:00"` |
/// | other  | `"Hazardous cargo prohibited"`      |
pub fn describe_restriction<R: Rng + ?Sized>(
    rng: &mut R,
    kind: RestrictionKind,
) -> (String, String) {
    match kind {
        RestrictionKind::Weight => (
            format!("{} tons", rng.random_range(10..=40u32)),
            "Maximum gross vehicle weight".to_string(),
        ),
        RestrictionKind::Height => (
            format!("{:.1} m", uniform(rng, 3.5, 5.0)),
            "Low clearance".to_string(),
        ),
        RestrictionKind::Width => (
            format!("{:.1} m", uniform(rng, 2.5, 3.5)),
            "Narrow carriageway".to_string(),
        ),
        RestrictionKind::Length => (
            format!("{} m", rng.random_range(12..=20u32)),
            "Maximum vehicle length".to_string(),
        ),
        RestrictionKind::Time => {
            let from = rng.random_range(6..=9u32);
            let to = rng.random_range(18..=22u32);
            (
                format!("No entry {from:02}:00 - {to:02}:00"),
                "Heavy vehicle entry window".to_string(),
            )
        }
        RestrictionKind::Other => (
            "Hazardous cargo prohibited".to_string(),
            "Local regulation".to_string(),
        ),
    }
}

/// With probability 0.3, places one weight or height restriction 60% of the
/// way from `origin` to `destination`, together with the waypoint marking it.
pub fn generate_route_restriction<R: Rng + ?Sized>(
    rng: &mut R,
    origin: &Location,
    destination: &Location,
) -> Option<(Restriction, Waypoint)> {
    if !chance(rng, ROUTE_RESTRICTION_RATE) {
        return None;
    }

    let kind = if chance(rng, 0.5) {
        RestrictionKind::Weight
    } else {
        RestrictionKind::Height
    };
    let (value, description) = describe_restriction(rng, kind);
    let point = origin
        .point()
        .lerp(destination.point(), ROUTE_RESTRICTION_POSITION);
    let name = format!("{kind} Restriction");

    let marker = Waypoint::new(
        "restriction-1",
        name.clone(),
        WaypointKind::Restriction,
        point,
        format!("{description}: {value}"),
    );
    let restriction = Restriction {
        id: "restriction-1".to_string(),
        kind,
        value,
        description,
        location: Some(Location::at("restriction-1", name, point)),
    };
    Some((restriction, marker))
}
