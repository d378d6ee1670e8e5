//! Numerical integration for nanalysis.
//!
//! This module provides fixed-step and adaptive quadrature for definite
//! integrals of a scalar function over a finite interval.
//!
//! # Quadrature Methods
//!
//! - [`trapezoid`] / [`trapezoid_composite`] - Trapezoidal rule
//! - [`simpson`] / [`simpson_composite`] - Simpson's 1/3 rule
//! - [`simpson_adaptive`] - Adaptive Simpson with an explicit work stack
//! - [`gauss2`] - Two-point Gauss-Legendre rule
//! - [`gauss_adaptive`] - Adaptive two-point Gaussian quadrature
//!
//! # Convergence
//!
//! The adaptive methods never fail. When the depth limit is reached they log
//! a warning and return a best-effort [`AdaptiveResult`] with
//! `converged = false`; [`AdaptiveResult::into_result`] turns that into an
//! [`IntegrateError`].
//!
//! # Example
//!
//! ```
//! use nanalysis::integrate::{gauss_adaptive, simpson_adaptive, AdaptiveOptions};
//!
//! let f = |x: f64| x.exp();
//! let s = simpson_adaptive(f, 0.0, 1.0, &AdaptiveOptions::simpson());
//! let g = gauss_adaptive(f, 0.0, 1.0, &AdaptiveOptions::gauss());
//! assert!((s.integral - g.integral).abs() < 1e-5);
//! ```

pub mod error;
pub mod quadrature;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export quadrature
pub use quadrature::{
    AdaptiveMethod, AdaptiveOptions, AdaptiveResult, DEFAULT_PANELS, gauss_adaptive, gauss2,
    simpson, simpson_adaptive, simpson_composite, trapezoid, trapezoid_composite,
};
