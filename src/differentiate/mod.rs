//! Finite-difference approximations of derivatives.
//!
//! Every formula samples the target function at a handful of points spaced
//! `h` apart and combines the samples with fixed weights. There is no step
//! size selection and no error control: the caller picks `h`.
//!
//! | Function | Derivative | Samples | Accuracy |
//! |----------|------------|---------|----------|
//! | [`forward_difference`] | f' | 2 | O(h) |
//! | [`three_point_endpoint`] | f' | 3 | O(h²) |
//! | [`three_point_midpoint`] | f' | 2 | O(h²) |
//! | [`five_point_endpoint`] | f' | 5 | O(h⁴) |
//! | [`five_point_midpoint`] | f' | 4 | O(h⁴) |
//! | [`second_derivative_midpoint`] | f'' | 3 | O(h²) |
//!
//! Shrinking `h` reduces truncation error until cancellation in the
//! numerator takes over; [`DEFAULT_STEP`] is a reasonable starting point for
//! well-scaled functions.

mod finite_difference;

pub use finite_difference::{
    DEFAULT_STEP, Stencil, five_point_endpoint, five_point_midpoint, forward_difference,
    second_derivative_midpoint, three_point_endpoint, three_point_midpoint,
};
