//! Options and results shared by the adaptive integrators.
//!
//! Both integrators subdivide an interval until two successive estimates
//! agree to within a tolerance, bounded by a maximum subdivision depth.

use std::fmt;

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Default tolerance for adaptive Simpson's rule.
pub const SIMPSON_TOL: f64 = 1e-5;

/// Default tolerance for adaptive Gaussian quadrature.
pub const GAUSS_TOL: f64 = 1e-7;

/// Default maximum subdivision depth for both integrators.
pub const MAX_DEPTH: usize = 20;

/// Options for adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveOptions {
    /// Absolute tolerance between successive refinement estimates
    pub tol: f64,
    /// Maximum subdivision depth
    pub max_depth: usize,
}

impl AdaptiveOptions {
    /// Options with an explicit tolerance and depth.
    pub fn new(tol: f64, max_depth: usize) -> Self {
        Self { tol, max_depth }
    }

    /// Defaults for [`simpson_adaptive`](super::simpson_adaptive): tol = 1e-5, depth 20.
    pub fn simpson() -> Self {
        Self::new(SIMPSON_TOL, MAX_DEPTH)
    }

    /// Defaults for [`gauss_adaptive`](super::gauss_adaptive): tol = 1e-7, depth 20.
    pub fn gauss() -> Self {
        Self::new(GAUSS_TOL, MAX_DEPTH)
    }

    /// Replace the tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Replace the maximum depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self::simpson()
    }
}

/// Which adaptive integrator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptiveMethod {
    /// Adaptive Simpson's rule
    Simpson,
    /// Adaptive two-point Gauss-Legendre quadrature
    Gauss,
}

impl fmt::Display for AdaptiveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simpson => write!(f, "simpson_adaptive"),
            Self::Gauss => write!(f, "gauss_adaptive"),
        }
    }
}

/// Result of adaptive quadrature.
///
/// When `converged` is false the depth limit was hit and `integral` is a
/// best-effort value. How much of the work it reflects depends on the
/// integrator: Simpson stops at the first exhausted frame, Gauss skips only
/// the exhausted branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveResult {
    /// Computed integral value
    pub integral: f64,
    /// Number of target function evaluations
    pub neval: usize,
    /// Number of refinement steps (Simpson frames or Gauss nodes) performed
    pub steps: usize,
    /// Deepest subdivision level visited
    pub max_level: usize,
    /// Whether every subinterval met its tolerance
    pub converged: bool,
    /// Integrator that produced this result
    pub method: AdaptiveMethod,
    /// Depth limit in force
    pub max_depth: usize,
}

impl AdaptiveResult {
    /// Convert into `Ok(integral)` when converged, otherwise
    /// [`IntegrateError::DepthExceeded`] carrying the partial value.
    ///
    /// # Example
    ///
    /// ```
    /// use nanalysis::integrate::{simpson_adaptive, AdaptiveOptions};
    ///
    /// let value = simpson_adaptive(|x: f64| x.exp(), 0.0, 1.0, &AdaptiveOptions::simpson())
    ///     .into_result()
    ///     .unwrap();
    /// assert!((value - (std::f64::consts::E - 1.0)).abs() < 1e-5);
    /// ```
    pub fn into_result(self) -> IntegrateResult<f64> {
        if self.converged {
            Ok(self.integral)
        } else {
            Err(IntegrateError::DepthExceeded {
                max_depth: self.max_depth,
                partial: self.integral,
                context: self.method.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let simpson = AdaptiveOptions::simpson();
        assert_eq!(simpson.tol, 1e-5);
        assert_eq!(simpson.max_depth, 20);

        let gauss = AdaptiveOptions::gauss();
        assert_eq!(gauss.tol, 1e-7);
        assert_eq!(gauss.max_depth, 20);

        assert_eq!(AdaptiveOptions::default(), simpson);
    }

    #[test]
    fn test_builders() {
        let opts = AdaptiveOptions::gauss().with_tol(1e-3).with_max_depth(4);
        assert_eq!(opts, AdaptiveOptions::new(1e-3, 4));
    }

    #[test]
    fn test_into_result() {
        let mut result = AdaptiveResult {
            integral: 2.0,
            neval: 9,
            steps: 3,
            max_level: 2,
            converged: true,
            method: AdaptiveMethod::Gauss,
            max_depth: 20,
        };
        assert_eq!(result.into_result(), Ok(2.0));

        result.converged = false;
        let err = result.into_result().unwrap_err();
        assert_eq!(
            err,
            IntegrateError::DepthExceeded {
                max_depth: 20,
                partial: 2.0,
                context: "gauss_adaptive".to_string(),
            }
        );
    }
}
