//! Geographic point type.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use route_synth::geo::GeoPoint;
///
/// let a = GeoPoint::new(10.0, 20.0);
/// let b = GeoPoint::new(20.0, 40.0);
/// let p = a.lerp(b, 0.5);
/// assert!((p.lat - 15.0).abs() < 1e-12);
/// assert!((p.lng - 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns this point shifted by the given degree offsets.
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: GeoPoint, t: f64) -> Self {
        Self::new(
            self.lat + (other.lat - self.lat) * t,
            self.lng + (other.lng - self.lng) * t,
        )
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: GeoPoint) -> Self {
        self.lerp(other, 0.5)
    }

    /// Returns `true` if both coordinates are finite and within WGS-84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}
