//! Route request types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Location;

/// One end of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Where the trip starts.
    Origin,
    /// Where the trip ends.
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// An endpoint as the caller supplied it: a bare place name or a full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    /// Free-text place name, resolved by the synthesizer.
    Name(String),
    /// Already-resolved location.
    Location(Location),
}

impl From<&str> for LocationInput {
    fn from(name: &str) -> Self {
        LocationInput::Name(name.to_string())
    }
}

impl From<String> for LocationInput {
    fn from(name: String) -> Self {
        LocationInput::Name(name)
    }
}

impl From<Location> for LocationInput {
    fn from(location: Location) -> Self {
        LocationInput::Location(location)
    }
}

/// Vehicle dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dimensions {
    /// Overall length.
    pub length: Option<f64>,
    /// Overall width.
    pub width: Option<f64>,
    /// Overall height.
    pub height: Option<f64>,
}

/// Soft preferences a planner can set.
///
/// The synthesizer accepts these but no generation rule reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutePreferences {
    /// Favor safer roads.
    pub prioritize_safety: bool,
    /// Favor faster roads.
    pub prioritize_speed: bool,
    /// Favor cheaper roads.
    pub prioritize_cost: bool,
    /// Avoid toll roads.
    pub avoid_tolls: bool,
    /// Avoid highways.
    pub avoid_highways: bool,
}

/// A route-planning request.
///
/// # Examples
///
/// ```
/// use route_synth::models::{Dimensions, RouteRequest};
///
/// let req = RouteRequest::new("Delhi", "Agra", "trailer", 18.0).with_dimensions(Dimensions {
///     height: Some(4.2),
///     ..Dimensions::default()
/// });
/// assert_eq!(req.vehicle_type, "trailer");
/// assert_eq!(req.height(), Some(4.2));
///
/// let parsed: RouteRequest = serde_json::from_str(
///     r#"{"origin":"Delhi","destination":"Agra","vehicleType":"truck","weight":5,"avoidTolls":true}"#,
/// ).unwrap();
/// assert!(parsed.preferences.avoid_tolls);
/// assert!(parsed.dimensions.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Start of the trip.
    pub origin: LocationInput,
    /// End of the trip.
    pub destination: LocationInput,
    /// Vehicle type key.
    pub vehicle_type: String,
    /// Cargo weight in tons.
    pub weight: f64,
    /// Vehicle dimensions, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Preference flags.
    #[serde(flatten)]
    pub preferences: RoutePreferences,
}

impl RouteRequest {
    /// Creates a request without dimensions or preferences.
    pub fn new(
        origin: impl Into<LocationInput>,
        destination: impl Into<LocationInput>,
        vehicle_type: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            vehicle_type: vehicle_type.into(),
            weight,
            dimensions: None,
            preferences: RoutePreferences::default(),
        }
    }

    /// Sets vehicle dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Sets preference flags.
    pub fn with_preferences(mut self, preferences: RoutePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// The requested endpoint.
    pub fn endpoint(&self, endpoint: Endpoint) -> &LocationInput {
        match endpoint {
            Endpoint::Origin => &self.origin,
            Endpoint::Destination => &self.destination,
        }
    }

    /// Vehicle height in meters, if given.
    pub fn height(&self) -> Option<f64> {
        self.dimensions.and_then(|d| d.height)
    }
}
