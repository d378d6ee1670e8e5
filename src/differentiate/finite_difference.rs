//! Fixed-weight difference formulas.

/// Default step size for the difference formulas.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Forward difference approximation of f'(x).
///
/// Computes `(f(x + h) - f(x)) / h`, accurate to O(h).
///
/// # Example
///
/// ```
/// use nanalysis::differentiate::{forward_difference, DEFAULT_STEP};
///
/// let d = forward_difference(|x: f64| x * x, 3.0, DEFAULT_STEP);
/// assert!((d - 6.0).abs() < 1e-4);
/// ```
pub fn forward_difference<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x)) / h
}

/// Three-point endpoint approximation of f'(x).
///
/// Samples only on one side of `x`, which makes it usable at the left edge
/// of a domain. A negative `h` samples to the left instead. Accurate to
/// O(h²).
pub fn three_point_endpoint<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (-3.0 * f(x) + 4.0 * f(x + h) - f(x + 2.0 * h)) / (2.0 * h)
}

/// Three-point midpoint (central difference) approximation of f'(x).
///
/// Computes `(f(x + h) - f(x - h)) / 2h`, accurate to O(h²).
pub fn three_point_midpoint<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Five-point endpoint approximation of f'(x), accurate to O(h⁴).
///
/// Like [`three_point_endpoint`], a negative `h` gives the backward form.
pub fn five_point_endpoint<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (-25.0 * f(x) + 48.0 * f(x + h) - 36.0 * f(x + 2.0 * h) + 16.0 * f(x + 3.0 * h)
        - 3.0 * f(x + 4.0 * h))
        / (12.0 * h)
}

/// Five-point midpoint approximation of f'(x), accurate to O(h⁴).
pub fn five_point_midpoint<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x - 2.0 * h) - 8.0 * f(x - h) + 8.0 * f(x + h) - f(x + 2.0 * h)) / (12.0 * h)
}

/// Midpoint approximation of the second derivative f''(x).
///
/// Computes `(f(x - h) - 2f(x) + f(x + h)) / h²`, accurate to O(h²). The
/// division by h² makes this formula more sensitive to cancellation than the
/// first-derivative ones; steps much below 1e-4 rarely help.
pub fn second_derivative_midpoint<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x - h) - 2.0 * f(x) + f(x + h)) / (h * h)
}

/// A named finite-difference formula.
///
/// Lets callers choose the formula at runtime, and exposes the order of
/// accuracy so convergence can be checked generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stencil {
    /// [`forward_difference`]
    Forward,
    /// [`three_point_endpoint`]
    ThreePointEndpoint,
    /// [`three_point_midpoint`]
    ThreePointMidpoint,
    /// [`five_point_endpoint`]
    FivePointEndpoint,
    /// [`five_point_midpoint`]
    FivePointMidpoint,
    /// [`second_derivative_midpoint`]
    SecondDerivativeMidpoint,
}

impl Stencil {
    /// All stencils, in order of the table in the module docs.
    pub const ALL: [Stencil; 6] = [
        Stencil::Forward,
        Stencil::ThreePointEndpoint,
        Stencil::ThreePointMidpoint,
        Stencil::FivePointEndpoint,
        Stencil::FivePointMidpoint,
        Stencil::SecondDerivativeMidpoint,
    ];

    /// Apply the formula to `f` at `x` with step `h`.
    pub fn apply<F>(self, f: F, x: f64, h: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Stencil::Forward => forward_difference(f, x, h),
            Stencil::ThreePointEndpoint => three_point_endpoint(f, x, h),
            Stencil::ThreePointMidpoint => three_point_midpoint(f, x, h),
            Stencil::FivePointEndpoint => five_point_endpoint(f, x, h),
            Stencil::FivePointMidpoint => five_point_midpoint(f, x, h),
            Stencil::SecondDerivativeMidpoint => second_derivative_midpoint(f, x, h),
        }
    }

    /// Truncation order `p`: the error behaves like O(hᵖ).
    pub fn order(self) -> i32 {
        match self {
            Stencil::Forward => 1,
            Stencil::ThreePointEndpoint
            | Stencil::ThreePointMidpoint
            | Stencil::SecondDerivativeMidpoint => 2,
            Stencil::FivePointEndpoint | Stencil::FivePointMidpoint => 4,
        }
    }

    /// Which derivative the formula approximates (1 or 2).
    pub fn derivative(self) -> u32 {
        match self {
            Stencil::SecondDerivativeMidpoint => 2,
            _ => 1,
        }
    }

    /// Number of target function evaluations per call.
    pub fn evaluations(self) -> usize {
        match self {
            Stencil::Forward | Stencil::ThreePointMidpoint => 2,
            Stencil::ThreePointEndpoint | Stencil::SecondDerivativeMidpoint => 3,
            Stencil::FivePointMidpoint => 4,
            Stencil::FivePointEndpoint => 5,
        }
    }
}
