//! Vehicle reference record.

use serde::{Deserialize, Serialize};

use super::Dimensions;

/// A vehicle type from the fleet reference table.
///
/// # Examples
///
/// ```
/// use route_synth::models::Vehicle;
///
/// let v = Vehicle::new("v1", "trailer", "Flatbed Trailer", 28.0);
/// assert_eq!(v.kind, "trailer");
/// assert_eq!(v.max_weight, 28.0);
/// assert!(v.dimensions.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Stable identifier.
    pub id: String,
    /// Type key matched against [`RouteRequest::vehicle_type`](super::RouteRequest).
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Rated payload in tons.
    pub max_weight: f64,
    /// Body dimensions, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl Vehicle {
    /// Creates a vehicle without dimensions.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        max_weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            max_weight,
            dimensions: None,
        }
    }

    /// Sets body dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}
