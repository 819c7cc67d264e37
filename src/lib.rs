//! # route-synth
//!
//! Mock route synthesis for trucking route-planning dashboards. Given an
//! origin, a destination, a vehicle and a cargo weight, the synthesizer
//! produces one recommended route and two or three alternatives, each with
//! tolls, rest stops, restrictions, a segment breakdown, a cost breakdown and
//! safety/reliability scores.
//!
//! The routes are plausible, not computed: nothing here searches a road
//! graph. Every figure is either sampled from a fixed distribution or derived
//! from sampled values by a fixed formula, and all randomness flows through an
//! injected [`rand::Rng`] so a seeded generator reproduces a set exactly.
//!
//! ## Modules
//!
//! - [`models`] — Request, route, segment, toll, waypoint and reference records
//! - [`geo`] — Coordinates, interpolation and encoded polylines
//! - [`sampling`] — Weighted categorical sampling and uniform draws
//! - [`generators`] — Toll, rest-stop and restriction generators
//! - [`segments`] — Route decomposition into sampled segments
//! - [`evaluation`] — Cost, emission, score and permit derivation
//! - [`synthesis`] — The route-set orchestrator and async entry points
//! - [`reference`] — Read-only lookup boundary for locations and vehicles
//! - [`config`] — Tunable constants of the generator
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use route_synth::models::RouteRequest;
//! use route_synth::synthesis::RouteSynthesizer;
//!
//! let synth = RouteSynthesizer::default();
//! let request = RouteRequest::new("Delhi", "Agra", "truck", 12.0);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let routes = synth.generate(&request, &mut rng).unwrap();
//! assert!(routes.len() == 3 || routes.len() == 4);
//! assert!(routes[0].is_recommended);
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod generators;
pub mod geo;
pub mod models;
pub mod reference;
pub mod sampling;
pub mod segments;
pub mod synthesis;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use synthesis::{optimize_route, RouteSynthesizer};
