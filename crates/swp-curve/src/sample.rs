//! Sample records and the curves built from them.

use serde::{Deserialize, Serialize};
use swp_core::{Result, SwpError, Tolerance, Validate};
use swp_math::{Aabb3, Point3, Transform, Vector3};

/// One point of a discretized curve with its moving frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Position
    pub v: Point3,
    /// Unit tangent
    pub t: Vector3,
    /// Unit normal
    pub n: Vector3,
    /// Unit binormal, `t × n`
    pub b: Vector3,
}

impl CurveSample {
    /// Local frame at this sample with N, B, T as the x, y, z axes.
    pub fn frame_transform(&self) -> Transform {
        Transform::from_frame(self.n, self.b, self.t, self.v)
    }

    fn check_frame(&self, tolerance: Tolerance) -> std::result::Result<(), String> {
        for (name, axis) in [("T", self.t), ("N", self.n), ("B", self.b)] {
            if !axis.is_finite() {
                return Err(format!("{} is not finite ({})", name, axis));
            }
            if !tolerance.is_unit(axis.length()) {
                return Err(format!("{} has length {}", name, axis.length()));
            }
        }
        for (name, dot) in [
            ("T.N", self.t.dot(self.n)),
            ("T.B", self.t.dot(self.b)),
            ("N.B", self.n.dot(self.b)),
        ] {
            if !tolerance.is_orthogonal(dot) {
                return Err(format!("{} = {}", name, dot));
            }
        }
        if self.t.cross(self.n).dot(self.b) <= 0.0 {
            return Err("frame is left-handed".to_string());
        }
        Ok(())
    }
}

/// An ordered sequence of samples owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    samples: Vec<CurveSample>,
}

impl Curve {
    pub fn new(samples: Vec<CurveSample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveSample> {
        self.samples.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.samples.iter().map(|s| s.v)
    }

    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.positions())
    }

    /// Whether the first and last positions coincide within `tolerance`.
    pub fn is_closed(&self, tolerance: Tolerance) -> bool {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) if self.samples.len() > 1 => {
                tolerance.is_zero(first.v.distance(last.v))
            }
            _ => false,
        }
    }
}

impl Validate for Curve {
    /// Checks every frame is orthonormal and right-handed.
    fn validate(&self, tolerance: Tolerance) -> Result<()> {
        for (i, sample) in self.samples.iter().enumerate() {
            sample
                .check_frame(tolerance)
                .map_err(|reason| SwpError::Degenerate(format!("sample {}: {}", i, reason)))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurveSample;
    type IntoIter = std::slice::Iter<'a, CurveSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Curve {
    type Item = CurveSample;
    type IntoIter = std::vec::IntoIter<CurveSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl FromIterator<CurveSample> for Curve {
    fn from_iter<I: IntoIterator<Item = CurveSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
