//! A target function bound once and shared by every operation.

use crate::differentiate::{self, Stencil};
use crate::integrate::{self, AdaptiveOptions, AdaptiveResult};

/// Numerical differentiation and integration of one target function.
///
/// Binds `f` at construction; every method evaluates it as needed and keeps
/// no state between calls, so a `NumMethods` can be shared freely across
/// threads when `F: Sync`.
///
/// Step sizes, panel counts and adaptive options are explicit arguments. The
/// documented defaults are [`DEFAULT_STEP`](crate::differentiate::DEFAULT_STEP),
/// [`DEFAULT_PANELS`](crate::integrate::DEFAULT_PANELS),
/// [`AdaptiveOptions::simpson`] and [`AdaptiveOptions::gauss`].
///
/// # Example
///
/// ```
/// use nanalysis::NumMethods;
/// use nanalysis::differentiate::DEFAULT_STEP;
/// use nanalysis::integrate::DEFAULT_PANELS;
///
/// let m = NumMethods::new(f64::sin);
/// assert!((m.three_point_midpoint(0.0, DEFAULT_STEP) - 1.0).abs() < 1e-9);
/// assert!((m.simpson_composite(0.0, std::f64::consts::PI, DEFAULT_PANELS) - 2.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumMethods<F> {
    func: F,
}

impl<F> NumMethods<F>
where
    F: Fn(f64) -> f64,
{
    /// Bind the target function.
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Evaluate the target function directly.
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Borrow the bound function.
    pub fn func(&self) -> &F {
        &self.func
    }

    /// Release the bound function.
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Apply any [`Stencil`] at `x` with step `h`.
    pub fn differentiate(&self, stencil: Stencil, x: f64, h: f64) -> f64 {
        stencil.apply(&self.func, x, h)
    }

    /// See [`differentiate::forward_difference`].
    pub fn forward_difference(&self, x: f64, h: f64) -> f64 {
        differentiate::forward_difference(&self.func, x, h)
    }

    /// See [`differentiate::three_point_endpoint`].
    pub fn three_point_endpoint(&self, x: f64, h: f64) -> f64 {
        differentiate::three_point_endpoint(&self.func, x, h)
    }

    /// See [`differentiate::three_point_midpoint`].
    pub fn three_point_midpoint(&self, x: f64, h: f64) -> f64 {
        differentiate::three_point_midpoint(&self.func, x, h)
    }

    /// See [`differentiate::five_point_endpoint`].
    pub fn five_point_endpoint(&self, x: f64, h: f64) -> f64 {
        differentiate::five_point_endpoint(&self.func, x, h)
    }

    /// See [`differentiate::five_point_midpoint`].
    pub fn five_point_midpoint(&self, x: f64, h: f64) -> f64 {
        differentiate::five_point_midpoint(&self.func, x, h)
    }

    /// See [`differentiate::second_derivative_midpoint`].
    pub fn second_derivative_midpoint(&self, x: f64, h: f64) -> f64 {
        differentiate::second_derivative_midpoint(&self.func, x, h)
    }

    /// See [`integrate::trapezoid`].
    pub fn trapezoid(&self, a: f64, b: f64) -> f64 {
        integrate::trapezoid(&self.func, a, b)
    }

    /// See [`integrate::trapezoid_composite`].
    pub fn trapezoid_composite(&self, a: f64, b: f64, n: usize) -> f64 {
        integrate::trapezoid_composite(&self.func, a, b, n)
    }

    /// See [`integrate::simpson`].
    pub fn simpson(&self, a: f64, b: f64) -> f64 {
        integrate::simpson(&self.func, a, b)
    }

    /// See [`integrate::simpson_composite`]. `n` should be even.
    pub fn simpson_composite(&self, a: f64, b: f64, n: usize) -> f64 {
        integrate::simpson_composite(&self.func, a, b, n)
    }

    /// See [`integrate::simpson_adaptive`].
    pub fn simpson_adaptive(&self, a: f64, b: f64, options: &AdaptiveOptions) -> AdaptiveResult {
        integrate::simpson_adaptive(&self.func, a, b, options)
    }

    /// See [`integrate::gauss2`].
    pub fn gauss2(&self, a: f64, b: f64) -> f64 {
        integrate::gauss2(&self.func, a, b)
    }

    /// See [`integrate::gauss_adaptive`].
    pub fn gauss_adaptive(&self, a: f64, b: f64, options: &AdaptiveOptions) -> AdaptiveResult {
        integrate::gauss_adaptive(&self.func, a, b, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differentiate::DEFAULT_STEP;
    use crate::integrate::DEFAULT_PANELS;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{E, PI};

    fn polynomial(x: f64) -> f64 {
        4.0 * x.powi(5) - x * x + 2.0
    }

    #[test]
    fn test_methods_match_free_functions() {
        let m = NumMethods::new(|x: f64| x.cos() * x);
        let f = |x: f64| x.cos() * x;

        assert_eq!(m.eval(0.4), f(0.4));
        assert_eq!(
            m.forward_difference(0.4, DEFAULT_STEP),
            differentiate::forward_difference(f, 0.4, DEFAULT_STEP)
        );
        assert_eq!(
            m.differentiate(Stencil::FivePointMidpoint, 0.4, 1e-3),
            differentiate::five_point_midpoint(f, 0.4, 1e-3)
        );
        assert_eq!(
            m.trapezoid_composite(0.0, 1.0, DEFAULT_PANELS),
            integrate::trapezoid_composite(f, 0.0, 1.0, DEFAULT_PANELS)
        );
        assert_eq!(m.gauss2(0.0, 1.0), integrate::gauss2(f, 0.0, 1.0));
        assert_eq!(
            m.simpson_adaptive(0.0, 1.0, &AdaptiveOptions::simpson()),
            integrate::simpson_adaptive(f, 0.0, 1.0, &AdaptiveOptions::simpson())
        );
    }

    #[test]
    fn test_square_on_zero_three() {
        let m = NumMethods::new(|x: f64| x * x);
        let s = m.simpson_adaptive(0.0, 3.0, &AdaptiveOptions::simpson());
        let g = m.gauss_adaptive(0.0, 3.0, &AdaptiveOptions::gauss());
        assert_abs_diff_eq!(s.integral, 9.0, epsilon = 1e-5);
        assert_abs_diff_eq!(g.integral, 9.0, epsilon = 1e-7);
        assert_abs_diff_eq!(m.simpson(0.0, 3.0), 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            m.simpson_composite(0.0, 3.0, DEFAULT_PANELS),
            9.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_adaptive_integrators_agree() {
        let simpson_opts = AdaptiveOptions::simpson();
        let gauss_opts = AdaptiveOptions::gauss();
        let bound = simpson_opts.tol.max(gauss_opts.tol);

        let cases: [(&str, fn(f64) -> f64, f64, f64, f64); 3] = [
            ("polynomial", polynomial, -1.0, 2.0, 45.0),
            ("trigonometric", f64::sin, 0.0, PI, 2.0),
            ("exponential", f64::exp, 0.0, 1.0, E - 1.0),
        ];

        for (name, f, a, b, exact) in cases {
            let m = NumMethods::new(f);
            let s = m.simpson_adaptive(a, b, &simpson_opts);
            let g = m.gauss_adaptive(a, b, &gauss_opts);

            assert!(s.converged && g.converged, "{}", name);
            assert!(
                (s.integral - g.integral).abs() < bound,
                "{}: {} vs {}",
                name,
                s.integral,
                g.integral
            );
            assert!(
                (s.integral - exact).abs() < bound,
                "{}: simpson {}",
                name,
                s.integral
            );
            assert!(
                (g.integral - exact).abs() < bound,
                "{}: gauss {}",
                name,
                g.integral
            );
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let m = NumMethods::new(|x: f64| (-x * x).exp());
        let expected = m.gauss_adaptive(-2.0, 2.0, &AdaptiveOptions::gauss());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| m.gauss_adaptive(-2.0, 2.0, &AdaptiveOptions::gauss())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_into_inner() {
        let m = NumMethods::new(|x: f64| x + 1.0);
        assert_eq!((m.func())(1.0), 2.0);
        let f = m.into_inner();
        assert_eq!(f(2.0), 3.0);
    }
}
