//! Piecewise cubic Bezier evaluation.

use log::{debug, warn};
use swp_core::{Basis, Result, SwpError};
use swp_math::{DMat4, Point3, Vector3};

use crate::basis::{monomial, monomial_dt, BERNSTEIN};
use crate::frame::{FrameTransport, UP};
use crate::sample::{Curve, CurveSample};
use crate::check_steps;

/// One cubic piece of a piecewise Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub points: [Point3; 4],
}

/// Samples of one segment together with the frame state around them.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSamples {
    /// Reference binormal the first sample was built from
    pub seed: Vector3,
    pub samples: Vec<CurveSample>,
    /// Binormal of the last sample, which seeds the next segment
    pub final_binormal: Vector3,
}

impl BezierSegment {
    pub fn new(points: [Point3; 4]) -> Self {
        Self { points }
    }

    fn geometry(&self) -> DMat4 {
        let [p0, p1, p2, p3] = self.points;
        DMat4::from_cols(p0.extend(0.0), p1.extend(0.0), p2.extend(0.0), p3.extend(0.0))
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        (self.geometry() * BERNSTEIN * monomial(t)).truncate()
    }

    /// First derivative with respect to `t`.
    pub fn derivative_at(&self, t: f64) -> Vector3 {
        (self.geometry() * BERNSTEIN * monomial_dt(t)).truncate()
    }

    /// Sample `steps + 1` evenly spaced parameters in `[0, 1]`, building
    /// frames from `seed`.
    pub fn sample(&self, steps: u32, seed: Vector3) -> SegmentSamples {
        let mut transport = FrameTransport::new(seed);
        let basis = self.geometry() * BERNSTEIN;
        let samples = (0..=steps)
            .map(|j| {
                let t = j as f64 / steps as f64;
                transport.advance(
                    (basis * monomial(t)).truncate(),
                    (basis * monomial_dt(t)).truncate(),
                )
            })
            .collect();
        SegmentSamples {
            seed,
            samples,
            final_binormal: transport.reference(),
        }
    }
}

/// Split a 3n+1 control polygon into its overlapping 4-point segments.
pub fn bezier_segments(points: &[Point3]) -> Result<Vec<BezierSegment>> {
    if points.len() < 4 || (points.len() - 1) % 3 != 0 {
        warn!(
            "Bezier evaluation needs 3n+1 control points, got {}",
            points.len()
        );
        return Err(SwpError::InvalidControlPoints {
            basis: Basis::Bezier,
            count: points.len(),
            requirement: "3n+1 (n >= 1)",
        });
    }
    Ok(points
        .windows(4)
        .step_by(3)
        .map(|w| BezierSegment::new([w[0], w[1], w[2], w[3]]))
        .collect())
}

/// Evaluate a piecewise cubic Bezier curve.
///
/// Each segment contributes `steps + 1` samples, so the point where two
/// segments meet appears twice. The first segment's frames are seeded with
/// [`UP`]; every later segment starts from the previous segment's final
/// binormal. Adjacent segments must be G1 continuous and no tangent may be
/// parallel to the binormal it is built from, otherwise the normal is
/// undefined and the returned frames contain NaN (see
/// [`Validate`](swp_core::Validate)).
///
/// # Errors
/// [`SwpError::InvalidControlPoints`] unless the point count is 3n+1 with
/// n >= 1, [`SwpError::InvalidSteps`] when `steps` is zero.
pub fn eval_bezier(points: &[Point3], steps: u32) -> Result<Curve> {
    let segments = bezier_segments(points)?;
    check_steps(Basis::Bezier, steps)?;
    debug!(
        "evaluating Bezier curve: {} control points, {} segments, {} steps",
        points.len(),
        segments.len(),
        steps
    );

    let mut samples = Vec::with_capacity(segments.len() * (steps as usize + 1));
    segments.iter().fold(UP, |seed, segment| {
        let piece = segment.sample(steps, seed);
        samples.extend(piece.samples);
        piece.final_binormal
    });
    Ok(Curve::new(samples))
}
