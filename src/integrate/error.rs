//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
///
/// The integrators themselves never return these: depth exhaustion is
/// reported through [`AdaptiveResult::converged`](super::AdaptiveResult) and
/// a log diagnostic. [`AdaptiveResult::into_result`](super::AdaptiveResult::into_result)
/// converts a non-converged result into an error for callers that want one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// Subdivision reached the depth limit before meeting the tolerance.
    ///
    /// `partial` is the best-effort value the integrator returned.
    #[error("{context}: maximum subdivision depth {max_depth} exceeded (partial result {partial})")]
    DepthExceeded {
        max_depth: usize,
        partial: f64,
        context: String,
    },
}

impl IntegrateError {
    /// The best-effort value carried by the error.
    pub fn partial(&self) -> f64 {
        match self {
            Self::DepthExceeded { partial, .. } => *partial,
        }
    }
}
