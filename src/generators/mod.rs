//! Generators for the points of interest placed on a route.
//!
//! - [`generate_tolls`] — Toll plazas with costs and FASTag flags
//! - [`generate_rest_stops`] — Rest-stop waypoints
//! - [`generate_route_restriction`] — Optional route-level weight/height limit
//! - [`describe_restriction`] — Kind-specific limit value and description

mod rest_stops;
mod restriction;
mod tolls;

pub use rest_stops::generate_rest_stops;
pub use restriction::{describe_restriction, generate_route_restriction};
pub use tolls::generate_tolls;
