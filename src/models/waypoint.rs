//! Waypoint types.

use serde::{Deserialize, Serialize};

use super::Location;
use crate::geo::GeoPoint;

/// Category of a point of interest along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    /// Toll plaza.
    Toll,
    /// Rest stop.
    Rest,
    /// Restriction marker.
    Restriction,
}

/// A point of interest placed along a route for display.
///
/// Waypoints are kept in generation order, which is not a geographic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category tag.
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Free-text detail line.
    pub details: String,
}

impl Waypoint {
    /// Creates a waypoint at the given point.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: WaypointKind,
        point: GeoPoint,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            lat: point.lat,
            lng: point.lng,
            details: details.into(),
        }
    }

    /// Coordinates of this waypoint.
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// This waypoint as a segment endpoint.
    pub fn to_location(&self) -> Location {
        Location::new(self.id.clone(), self.name.clone(), self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_tag() {
        let wp = Waypoint::new(
            "rest-1",
            "Rest Stop 1",
            WaypointKind::Rest,
            GeoPoint::new(1.0, 2.0),
            "Facilities: Food, Restrooms, Parking",
        );
        let json = serde_json::to_value(&wp).unwrap();
        assert_eq!(json["type"], "rest");
        assert_eq!(json["details"], "Facilities: Food, Restrooms, Parking");
    }

    #[test]
    fn test_to_location_keeps_identity() {
        let wp = Waypoint::new("toll-2", "Toll Plaza 2", WaypointKind::Toll, GeoPoint::new(3.0, 4.0), "");
        let loc = wp.to_location();
        assert_eq!(loc.id, "toll-2");
        assert_eq!(loc.name, "Toll Plaza 2");
        assert_eq!(loc.point(), wp.point());
    }
}
