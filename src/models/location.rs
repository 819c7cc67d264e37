//! Location type.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A named, coordinate-bearing place: a route endpoint, a toll plaza or the
/// position of a restriction.
///
/// # Examples
///
/// ```
/// use route_synth::models::Location;
///
/// let loc = Location::new("del", "Delhi", 28.6139, 77.2090).with_state("Delhi");
/// assert_eq!(loc.name, "Delhi");
/// assert_eq!(loc.state.as_deref(), Some("Delhi"));
/// assert!(loc.point().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Administrative state, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Street address, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    /// Creates a location without state or address.
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            state: None,
            address: None,
        }
    }

    /// Creates a location at the given point.
    pub fn at(id: impl Into<String>, name: impl Into<String>, point: GeoPoint) -> Self {
        Self::new(id, name, point.lat, point.lng)
    }

    /// Sets the administrative state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Coordinates of this location.
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
