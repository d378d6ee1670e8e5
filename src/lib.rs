//! Numerical differentiation and integration of scalar functions.
//!
//! `nanalysis` approximates derivatives and definite integrals of a
//! caller-supplied `Fn(f64) -> f64` without any symbolic machinery.
//!
//! # Modules
//!
//! - [`differentiate`] - Forward, three-point and five-point differences
//! - [`integrate`] - Fixed-step rules and adaptive quadrature
//! - [`methods`] - [`NumMethods`], which binds a target function once
//!
//! # Example
//!
//! ```
//! use nanalysis::NumMethods;
//! use nanalysis::integrate::AdaptiveOptions;
//!
//! let m = NumMethods::new(|x: f64| x * x);
//!
//! let simpson = m.simpson_adaptive(0.0, 3.0, &AdaptiveOptions::simpson());
//! let gauss = m.gauss_adaptive(0.0, 3.0, &AdaptiveOptions::gauss());
//!
//! assert!((simpson.integral - 9.0).abs() < 1e-5);
//! assert!((gauss.integral - 9.0).abs() < 1e-7);
//! assert!(simpson.converged && gauss.converged);
//! ```
//!
//! # Diagnostics
//!
//! The adaptive integrators report depth exhaustion through the [`log`]
//! facade (`warn!`) and through [`integrate::AdaptiveResult::converged`].
//! No logger is installed by this crate.

pub mod differentiate;
pub mod integrate;
pub mod methods;

pub use differentiate::Stencil;
pub use integrate::{AdaptiveOptions, AdaptiveResult, IntegrateError, IntegrateResult};
pub use methods::NumMethods;
