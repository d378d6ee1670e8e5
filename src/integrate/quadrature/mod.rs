//! Numerical quadrature (integration) methods.
//!
//! This module provides methods for numerically computing definite integrals
//! of a function `Fn(f64) -> f64` over a finite interval.
//!
//! # Available Methods
//!
//! | Method | Kind | Accuracy |
//! |--------|------|----------|
//! | [`trapezoid`], [`trapezoid_composite`] | Fixed step | O(h²) |
//! | [`simpson`], [`simpson_composite`] | Fixed step | O(h⁴) |
//! | [`gauss2`] | Fixed, two nodes | Exact for cubics |
//! | [`simpson_adaptive`] | Adaptive, explicit work stack | To tolerance |
//! | [`gauss_adaptive`] | Adaptive, recursive | To tolerance |
//!
//! # Choosing a Method
//!
//! - **Known panel count**: [`simpson_composite`] with an even `n`
//! - **Smooth functions, error control**: [`simpson_adaptive`]
//! - **Tighter tolerances**: [`gauss_adaptive`], which keeps the tolerance
//!   fixed at every level instead of halving it
//!
//! None of the fixed-step rules validate their inputs.

mod adaptive;
mod gauss;
#[cfg(test)]
mod proptests;
mod simpson;
mod trapezoid;

/// Default number of panels for the composite rules.
pub const DEFAULT_PANELS: usize = 10;

// Re-export all public items
pub use adaptive::{
    AdaptiveMethod, AdaptiveOptions, AdaptiveResult, GAUSS_TOL, MAX_DEPTH, SIMPSON_TOL,
};
pub use gauss::{GAUSS2_NODE, gauss_adaptive, gauss2};
pub use simpson::{simpson, simpson_adaptive, simpson_composite};
pub use trapezoid::{trapezoid, trapezoid_composite};
