//! Gaussian quadrature methods.
//!
//! The two-point Gauss-Legendre rule samples at ±√3/3 on [-1, 1] with unit
//! weights and integrates cubics exactly. [`gauss_adaptive`] applies it
//! recursively until one-panel and two-panel estimates agree.

use log::{debug, warn};

use super::adaptive::{AdaptiveMethod, AdaptiveOptions, AdaptiveResult};

/// Positive node of the two-point Gauss-Legendre rule on [-1, 1] (√3/3).
pub const GAUSS2_NODE: f64 = 0.577_350_269_189_625_7;

/// Two-point Gauss-Legendre quadrature over [a, b].
///
/// Maps the nodes ±√3/3 from [-1, 1] onto [a, b] with the affine change of
/// variables `x = (a + b)/2 + (b - a)/2 · t`. Costs exactly two evaluations.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::gauss2;
///
/// // Exact for cubics
/// let result = gauss2(|x: f64| x.powi(3) + x, 0.0, 2.0);
/// assert!((result - 6.0).abs() < 1e-12);
/// ```
pub fn gauss2<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mid = (a + b) / 2.0;
    let half_width = (b - a) / 2.0;
    half_width * (f(mid - half_width * GAUSS2_NODE) + f(mid + half_width * GAUSS2_NODE))
}

/// Running state of the adaptive recursion, threaded by value.
#[derive(Debug, Clone, Copy, Default)]
struct GaussTally {
    sum: f64,
    neval: usize,
    steps: usize,
    max_level: usize,
    exhausted: usize,
}

/// Adaptive two-point Gaussian quadrature.
///
/// At each node, compares the one-panel estimate over [a, b] with the sum of
/// the estimates over the two halves. If they agree to within `tol` the
/// two-panel value is accepted; otherwise both halves are refined
/// recursively, the left before the right. Every node costs six evaluations.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Tolerance and maximum depth; see [`AdaptiveOptions::gauss`]
///
/// # Depth exhaustion
///
/// A node deeper than `max_depth` contributes nothing: its two-panel estimate
/// is discarded and the remaining branches carry on. Each such branch is
/// logged at debug level and a single warning summarizes them. The result
/// then has `converged = false`.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::{gauss_adaptive, AdaptiveOptions};
///
/// let result = gauss_adaptive(|x: f64| x * x, 0.0, 3.0, &AdaptiveOptions::gauss());
/// assert!((result.integral - 9.0).abs() < 1e-7);
/// assert!(result.converged);
/// ```
pub fn gauss_adaptive<F>(f: F, a: f64, b: f64, options: &AdaptiveOptions) -> AdaptiveResult
where
    F: Fn(f64) -> f64,
{
    let tally = gauss_refine(&f, a, b, 0, GaussTally::default(), options);

    if tally.exhausted > 0 {
        warn!(
            "gauss_adaptive: max depth {} reached on {} subinterval(s) of [{}, {}]; \
             their contributions were dropped",
            options.max_depth, tally.exhausted, a, b
        );
    } else {
        debug!(
            "gauss_adaptive: converged on [{}, {}] with {} evaluations, max level {}",
            a, b, tally.neval, tally.max_level
        );
    }

    AdaptiveResult {
        integral: tally.sum,
        neval: tally.neval,
        steps: tally.steps,
        max_level: tally.max_level,
        converged: tally.exhausted == 0,
        method: AdaptiveMethod::Gauss,
        max_depth: options.max_depth,
    }
}

fn gauss_refine<F>(
    f: &F,
    a: f64,
    b: f64,
    level: usize,
    tally: GaussTally,
    options: &AdaptiveOptions,
) -> GaussTally
where
    F: Fn(f64) -> f64,
{
    let level = level + 1;

    let one = gauss2(f, a, b);
    let c = (a + b) / 2.0;
    let two = gauss2(f, a, c) + gauss2(f, c, b);

    let tally = GaussTally {
        neval: tally.neval + 6,
        steps: tally.steps + 1,
        max_level: tally.max_level.max(level),
        ..tally
    };

    if level > options.max_depth {
        debug!("gauss_adaptive: max depth reached on [{}, {}]", a, b);
        GaussTally {
            exhausted: tally.exhausted + 1,
            ..tally
        }
    } else if (one - two).abs() < options.tol {
        GaussTally {
            sum: tally.sum + two,
            ..tally
        }
    } else {
        let left = gauss_refine(f, a, c, level, tally, options);
        gauss_refine(f, c, b, level, left, options)
    }
}
