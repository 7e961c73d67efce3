//! Analytic circle, exact frames for reference.

use std::f64::consts::TAU;

use log::debug;
use swp_core::{Basis, Result};
use swp_math::{dvec3, DVec3};

use crate::check_steps;
use crate::sample::{Curve, CurveSample};

/// Evaluate a circle of `radius` about the origin in the XY plane.
///
/// Produces `steps + 1` samples at angles `2π·i/steps`, counterclockwise
/// seen from +Z, so the first and last samples coincide. The tangent,
/// normal and binormal are exact: the normal points at the centre and the
/// binormal is +Z.
pub fn eval_circle(radius: f64, steps: u32) -> Result<Curve> {
    check_steps(Basis::Circle, steps)?;
    debug!("evaluating circle: radius {}, {} steps", radius, steps);

    Ok((0..=steps)
        .map(|i| {
            let theta = TAU * i as f64 / steps as f64;
            let (sin, cos) = theta.sin_cos();
            CurveSample {
                v: radius * dvec3(cos, sin, 0.0),
                t: dvec3(-sin, cos, 0.0),
                n: dvec3(-cos, -sin, 0.0),
                b: DVec3::Z,
            }
        })
        .collect())
}
