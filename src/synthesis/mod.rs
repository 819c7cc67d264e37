//! Route-set synthesis: the public entry points.
//!
//! [`RouteSynthesizer`] resolves a request's endpoints, draws the set-wide
//! base distance and alternative count, and builds each route from the
//! generators, the segment decomposer and the metric evaluator.
//! [`optimize_route`] is the async convenience entry with default settings.

mod synthesizer;

pub use synthesizer::{optimize_route, RouteSynthesizer};
