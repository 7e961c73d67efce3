//! Uniform cubic B-spline evaluation through Bezier conversion.

use log::{debug, warn};
use swp_core::{Basis, Result, SwpError};
use swp_math::{DMat4, Point3};

use crate::basis::BSPLINE_TO_BEZIER;
use crate::bezier::eval_bezier;
use crate::check_steps;
use crate::sample::Curve;

/// Convert a B-spline control polygon into an equivalent 3n+1 Bezier
/// control polygon, one Bezier segment per 4-point window.
pub fn bspline_to_bezier(points: &[Point3]) -> Result<Vec<Point3>> {
    if points.len() < 4 {
        warn!(
            "B-spline evaluation needs at least 4 control points, got {}",
            points.len()
        );
        return Err(SwpError::InvalidControlPoints {
            basis: Basis::BSpline,
            count: points.len(),
            requirement: "at least 4",
        });
    }

    let segments = points.len() - 3;
    let mut bezier = Vec::with_capacity(3 * segments + 1);
    for (i, w) in points.windows(4).enumerate() {
        let geometry = DMat4::from_cols(
            w[0].extend(0.0),
            w[1].extend(0.0),
            w[2].extend(0.0),
            w[3].extend(0.0),
        ) * BSPLINE_TO_BEZIER;
        // Window i ends where window i + 1 starts, so only the first
        // window contributes its start point.
        let first = if i == 0 { 0 } else { 1 };
        bezier.extend((first..4).map(|j| geometry.col(j).truncate()));
    }
    Ok(bezier)
}

/// Evaluate a uniform cubic B-spline by converting it to Bezier segments
/// and delegating to [`eval_bezier`].
///
/// `n` control points give `n - 3` segments of `steps + 1` samples each.
///
/// # Errors
/// [`SwpError::InvalidControlPoints`] for fewer than 4 points,
/// [`SwpError::InvalidSteps`] when `steps` is zero.
pub fn eval_bspline(points: &[Point3], steps: u32) -> Result<Curve> {
    let bezier = bspline_to_bezier(points)?;
    check_steps(Basis::BSpline, steps)?;
    debug!(
        "evaluating B-spline: {} control points converted to {} Bezier points",
        points.len(),
        bezier.len()
    );
    eval_bezier(&bezier, steps)
}
