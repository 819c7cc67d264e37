//! Metric derivation for synthesized routes.
//!
//! - [`RouteEvaluator`] — Distance, duration, fuel, costs, emissions, time saved, permits
//! - [`RouteConditions`] — Route-level weather, traffic and road quality draws
//! - [`safety_score`] / [`reliability_score`] — Bounded condition scores

mod evaluator;
mod scores;

pub use evaluator::{
    round_dp, MetricDraw, RouteConditions, RouteEvaluator, RouteMetrics, OVERSIZE_LOAD_PERMIT,
};
pub use scores::{reliability_score, safety_score};
