//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule uses linear interpolation between sample points,
//! achieving O(h²) accuracy for smooth functions.

/// Integrate using a single trapezoid over [a, b].
///
/// Computes `(b - a) / 2 * (f(a) + f(b))`. Exact for linear functions.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::trapezoid;
///
/// let result = trapezoid(|x: f64| 2.0 * x + 1.0, 0.0, 2.0);
/// assert!((result - 6.0).abs() < 1e-12);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (b - a) / 2.0 * (f(a) + f(b))
}

/// Integrate using the composite trapezoidal rule over `n` equal panels.
///
/// Evaluates the target function at the `n + 1` panel edges.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of panels
///
/// Neither the bounds nor `n` are validated: `b < a` gives the negated
/// integral and `n = 0` gives a non-finite result.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::trapezoid_composite;
///
/// let result = trapezoid_composite(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100);
/// assert!((result - 2.0).abs() < 1e-3);
/// ```
pub fn trapezoid_composite<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    h / 2.0 * (f(a) + 2.0 * interior + f(b))
}
