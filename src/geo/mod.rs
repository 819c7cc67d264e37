//! Coordinates and path encoding.
//!
//! Provides the lat/lng point type used throughout the crate and the
//! encoded-polyline writer used for route path strings.

mod point;
mod polyline;

pub use point::GeoPoint;
pub use polyline::encode_polyline;
