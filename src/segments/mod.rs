//! Route decomposition into sampled segments.
//!
//! - [`decompose`] — Partitions distance and duration across the legs of a route
//! - [`conditions`] — Per-segment road, weather, traffic and restriction draws

pub mod conditions;
mod decomposer;

pub use decomposer::decompose;
