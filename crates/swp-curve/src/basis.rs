//! Cubic basis matrices, column-major as glam stores them.

use swp_math::{DMat4, DVec4};

/// Bernstein coefficients in the monomial basis.
///
/// `BERNSTEIN * monomial(t)` yields the four cubic Bernstein weights at `t`.
pub(crate) const BERNSTEIN: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(3.0, -6.0, 3.0, 0.0),
    DVec4::new(-1.0, 3.0, -3.0, 1.0),
);

/// Uniform cubic B-spline to Bezier change of basis.
///
/// Column `j` holds the weights of the four B-spline points that give
/// Bezier point `j`.
pub(crate) const BSPLINE_TO_BEZIER: DMat4 = DMat4::from_cols(
    DVec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0),
    DVec4::new(0.0, 4.0 / 6.0, 2.0 / 6.0, 0.0),
    DVec4::new(0.0, 2.0 / 6.0, 4.0 / 6.0, 0.0),
    DVec4::new(0.0, 1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0),
);

/// `[1, t, t², t³]`
pub(crate) fn monomial(t: f64) -> DVec4 {
    DVec4::new(1.0, t, t * t, t * t * t)
}

/// Derivative of [`monomial`]: `[0, 1, 2t, 3t²]`
pub(crate) fn monomial_dt(t: f64) -> DVec4 {
    DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}
