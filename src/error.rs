//! The public error type.

use thiserror::Error;

/// Errors surfaced by the rating engine.
///
/// Configuration problems are reported at configuration time, never deferred
/// to draw time. Out-of-range interaction coordinates are clamped rather than
/// rejected; only a non-finite coordinate is an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// Geometry or configuration input that cannot produce a valid render.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which constraint was violated.
        reason: String,
    },

    /// A non-finite (NaN or infinite) interaction coordinate.
    #[error("interaction coordinate is not finite: {value}")]
    OutOfBounds {
        /// The offending coordinate.
        value: f64,
    },
}

impl RatingError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
