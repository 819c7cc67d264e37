//! Crate error type.
//!
//! Callers see exactly three outcomes from the synthesizer: a route list, a
//! resolution failure naming the endpoint that could not be placed, or the
//! opaque [`SynthError::OptimizationFailed`]. Internal causes behind the
//! latter are logged, never returned.

use thiserror::Error;

use crate::models::Endpoint;
use crate::sampling::SamplingError;

/// Errors produced by route synthesis.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Origin or destination could not be turned into coordinates.
    #[error("could not resolve {endpoint} location: {reason}")]
    LocationUnresolved {
        /// Which end of the route failed.
        endpoint: Endpoint,
        /// Human-readable cause.
        reason: String,
    },

    /// Generation failed; the cause has been logged.
    #[error("failed to optimize route")]
    OptimizationFailed,

    /// Request JSON could not be parsed.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// The generator configuration is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sampler precondition was violated.
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Shorthand result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
