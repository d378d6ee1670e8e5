//! Simpson's rule for numerical integration.
//!
//! Simpson's rule uses parabolic approximation between sample points,
//! achieving O(h⁴) accuracy for smooth functions. This module provides the
//! single-panel and composite rules, plus an adaptive variant that refines
//! only where the estimate has not settled.

use log::{debug, warn};

use super::adaptive::{AdaptiveMethod, AdaptiveOptions, AdaptiveResult};

/// Integrate using a single Simpson panel over [a, b].
///
/// Samples the endpoints and the midpoint. Exact for cubics.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::simpson;
///
/// let result = simpson(|x: f64| x.powi(3), 0.0, 2.0);
/// assert!((result - 4.0).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / 2.0;
    h / 3.0 * (f(a) + 4.0 * f((b + a) / 2.0) + f(b))
}

/// Integrate a function using the composite Simpson's 1/3 rule.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (must be even)
///
/// `n` is not checked. An odd `n` silently produces a wrong weighting at the
/// right end, so passing an even count is the caller's job.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::simpson_composite;
///
/// // Integrate sin(x) from 0 to pi
/// let result = simpson_composite(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100);
/// assert!((result - 2.0).abs() < 1e-6);
/// ```
pub fn simpson_composite<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / n as f64;
    let ends = f(a) + f(b);

    let mut even = 0.0;
    let mut odd = 0.0;
    for i in 1..n {
        let x = a + i as f64 * h;
        if i % 2 == 0 {
            even += f(x);
        } else {
            odd += f(x);
        }
    }

    h * (ends + 2.0 * even + 4.0 * odd) / 3.0
}

/// One pending subinterval [a, a + 2h] on the adaptive Simpson work stack.
#[derive(Debug, Clone, Copy)]
struct SimpsonFrame {
    /// Left edge
    a: f64,
    /// Half-width
    h: f64,
    /// f(a)
    fa: f64,
    /// f(a + h)
    fc: f64,
    /// f(a + 2h)
    fb: f64,
    /// Simpson estimate over the whole frame
    s: f64,
    /// Local tolerance
    tol: f64,
    /// Subdivision level, 1 for the full interval
    level: usize,
}

/// Adaptive Simpson's rule.
///
/// Compares the Simpson estimate of each subinterval with the sum of the
/// estimates of its two halves. Halves that disagree by more than the local
/// tolerance are pushed back on a work stack with half the tolerance. Samples
/// are reused between levels, so each refinement costs two evaluations and
/// the total is `3 + 2 * steps`.
///
/// The work stack holds at most `max_depth` frames and grows only as deep as
/// the refinement actually goes. No recursion is involved.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `options` - Tolerance and maximum depth; see [`AdaptiveOptions::simpson`]
///
/// # Depth exhaustion
///
/// If a frame at level `max_depth` still fails the tolerance, a warning is
/// logged and integration stops at once: the frames still on the stack are
/// dropped and the sum accumulated so far is returned with
/// `converged = false`.
///
/// # Example
///
/// ```
/// use nanalysis::integrate::{simpson_adaptive, AdaptiveOptions};
///
/// let opts = AdaptiveOptions::simpson();
/// let result = simpson_adaptive(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &opts);
/// assert!((result.integral - 2.0).abs() < 1e-5);
/// assert_eq!(result.neval, 3 + 2 * result.steps);
/// ```
pub fn simpson_adaptive<F>(f: F, a: f64, b: f64, options: &AdaptiveOptions) -> AdaptiveResult
where
    F: Fn(f64) -> f64,
{
    let max_depth = options.max_depth;

    // Frame i always has level >= i + 1 and children are only pushed below
    // max_depth, so the stack never holds more than max_depth frames. The
    // reservation is capped since a huge max_depth is rarely reached.
    let mut stack = Vec::with_capacity(max_depth.clamp(1, 64));

    let h = (b - a) / 2.0;
    let (fa, fc, fb) = (f(a), f(a + h), f(b));
    stack.push(SimpsonFrame {
        a,
        h,
        fa,
        fc,
        fb,
        s: h * (fa + 4.0 * fc + fb) / 3.0,
        tol: options.tol,
        level: 1,
    });

    let mut integral = 0.0;
    let mut neval = 3;
    let mut steps = 0;
    let mut max_level = 1;

    while let Some(frame) = stack.pop() {
        let fd = f(frame.a + frame.h / 2.0);
        let fe = f(frame.a + 3.0 * frame.h / 2.0);
        neval += 2;
        steps += 1;

        let s1 = frame.h * (frame.fa + 4.0 * fd + frame.fc) / 6.0;
        let s2 = frame.h * (frame.fc + 4.0 * fe + frame.fb) / 6.0;

        if (s1 + s2 - frame.s).abs() < frame.tol {
            integral += s1 + s2;
        } else if frame.level >= max_depth {
            warn!(
                "simpson_adaptive: level exceeded on [{}, {}] at depth {}; \
                 returning partial sum {} ({} pending subintervals dropped)",
                frame.a,
                frame.a + 2.0 * frame.h,
                max_depth,
                integral,
                stack.len()
            );
            return AdaptiveResult {
                integral,
                neval,
                steps,
                max_level,
                converged: false,
                method: AdaptiveMethod::Simpson,
                max_depth,
            };
        } else {
            let half = frame.h / 2.0;
            let tol = frame.tol / 2.0;
            let level = frame.level + 1;

            // Right half below, left half on top so the left is refined first
            stack.push(SimpsonFrame {
                a: frame.a + frame.h,
                h: half,
                fa: frame.fc,
                fc: fe,
                fb: frame.fb,
                s: s2,
                tol,
                level,
            });
            stack.push(SimpsonFrame {
                a: frame.a,
                h: half,
                fa: frame.fa,
                fc: fd,
                fb: frame.fc,
                s: s1,
                tol,
                level,
            });
            max_level = max_level.max(level);
        }
    }

    debug!(
        "simpson_adaptive: converged on [{}, {}] with {} evaluations, max level {}",
        a, b, neval, max_level
    );

    AdaptiveResult {
        integral,
        neval,
        steps,
        max_level,
        converged: true,
        method: AdaptiveMethod::Simpson,
        max_depth,
    }
}
