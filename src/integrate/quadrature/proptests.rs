//! Property-based tests for the quadrature rules.

use proptest::prelude::*;

use super::*;

// Cubic with small integer coefficients
fn cubic() -> impl Strategy<Value = [f64; 4]> {
    prop::array::uniform4((-5i32..=5).prop_map(f64::from))
}

fn eval(c: [f64; 4], x: f64) -> f64 {
    ((c[3] * x + c[2]) * x + c[1]) * x + c[0]
}

fn antiderivative(c: [f64; 4], x: f64) -> f64 {
    (((c[3] / 4.0 * x + c[2] / 3.0) * x + c[1] / 2.0) * x + c[0]) * x
}

fn interval() -> impl Strategy<Value = (f64, f64)> {
    (-3.0f64..3.0, 0.1f64..4.0).prop_map(|(a, width)| (a, a + width))
}

proptest! {
    #[test]
    fn repeated_calls_are_bit_identical(k in 0.5f64..6.0, (a, b) in interval()) {
        let f = |x: f64| (k * x).sin() + (x / k).exp();

        let s1 = simpson_adaptive(f, a, b, &AdaptiveOptions::simpson());
        let s2 = simpson_adaptive(f, a, b, &AdaptiveOptions::simpson());
        prop_assert_eq!(s1, s2);

        let g1 = gauss_adaptive(f, a, b, &AdaptiveOptions::gauss());
        let g2 = gauss_adaptive(f, a, b, &AdaptiveOptions::gauss());
        prop_assert_eq!(g1, g2);

        prop_assert_eq!(
            simpson_composite(f, a, b, DEFAULT_PANELS).to_bits(),
            simpson_composite(f, a, b, DEFAULT_PANELS).to_bits()
        );
        prop_assert_eq!(
            trapezoid_composite(f, a, b, DEFAULT_PANELS).to_bits(),
            trapezoid_composite(f, a, b, DEFAULT_PANELS).to_bits()
        );
    }

    #[test]
    fn cubics_are_integrated_exactly(c in cubic(), (a, b) in interval()) {
        let f = |x: f64| eval(c, x);
        let exact = antiderivative(c, b) - antiderivative(c, a);
        // Bound on the size of the terms, so cancellation does not matter
        let reach = 1.0 + a.abs().max(b.abs());
        let scale = 1e-12 * (1.0 + c.iter().map(|v| v.abs()).sum::<f64>() * reach.powi(4));

        prop_assert!((simpson(f, a, b) - exact).abs() < scale);
        prop_assert!((gauss2(f, a, b) - exact).abs() < scale);
        prop_assert!((simpson_composite(f, a, b, 4) - exact).abs() < scale);

        let s = simpson_adaptive(f, a, b, &AdaptiveOptions::simpson());
        prop_assert!(s.converged);
        prop_assert!((s.integral - exact).abs() < scale);

        let g = gauss_adaptive(f, a, b, &AdaptiveOptions::gauss());
        prop_assert!(g.converged);
        prop_assert!((g.integral - exact).abs() < scale);
    }

    #[test]
    fn simpson_evaluation_invariant(k in 0.5f64..10.0, (a, b) in interval()) {
        let calls = std::cell::Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            (k * x).cos()
        };
        let result = simpson_adaptive(f, a, b, &AdaptiveOptions::simpson().with_max_depth(12));
        prop_assert_eq!(calls.get(), result.neval);
        prop_assert_eq!(result.neval, 3 + 2 * result.steps);
        prop_assert!(result.max_level <= 12);
    }
}
