//! Moving-frame propagation along a sampled curve.

use swp_math::{DVec3, Point3, Vector3};

use crate::sample::CurveSample;

/// Reference direction the first Bezier segment is seeded with.
pub const UP: Vector3 = DVec3::Z;

/// Carries the reference binormal from one sample to the next.
///
/// Each call to [`advance`](Self::advance) builds `N = normalize(B_ref × T)`
/// and `B = normalize(T × N)`, then makes `B` the new reference. Feeding
/// samples in curve order keeps the frame free of twists; a tangent parallel
/// to the reference leaves `N` undefined and the frame becomes NaN from that
/// point on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransport {
    reference: Vector3,
}

impl FrameTransport {
    pub fn new(seed: Vector3) -> Self {
        Self { reference: seed }
    }

    /// The binormal the next sample will be built from.
    pub fn reference(&self) -> Vector3 {
        self.reference
    }

    /// Build the sample at `position` whose derivative is `velocity`.
    pub fn advance(&mut self, position: Point3, velocity: Vector3) -> CurveSample {
        let t = velocity.normalize();
        let n = self.reference.cross(t).normalize();
        let b = t.cross(n).normalize();
        self.reference = b;
        CurveSample { v: position, t, n, b }
    }
}

impl Default for FrameTransport {
    fn default() -> Self {
        Self::new(UP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swp_math::dvec3;

    #[test]
    fn test_planar_tangent_keeps_up_binormal() {
        let mut transport = FrameTransport::default();
        let sample = transport.advance(DVec3::ZERO, dvec3(3.0, 0.0, 0.0));
        assert!((sample.t - DVec3::X).length() < 1e-12);
        assert!((sample.n - DVec3::Y).length() < 1e-12);
        assert!((sample.b - DVec3::Z).length() < 1e-12);
        assert_eq!(transport.reference(), sample.b);
    }

    #[test]
    fn test_reference_follows_last_binormal() {
        let mut transport = FrameTransport::default();
        transport.advance(DVec3::ZERO, dvec3(1.0, 0.0, 0.0));
        let sample = transport.advance(DVec3::X, dvec3(1.0, 0.0, 1.0));
        assert_eq!(transport.reference(), sample.b);
        assert!(sample.t.dot(sample.b).abs() < 1e-12);
        assert!(sample.n.dot(sample.b).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_along_reference_is_undefined() {
        let mut transport = FrameTransport::default();
        let sample = transport.advance(DVec3::ZERO, DVec3::Z);
        assert!(sample.n.is_nan());
        assert!(transport.reference().is_nan());
    }
}
