//! Curve descriptions that can be evaluated later, e.g. when loaded from JSON.

use serde::{Deserialize, Serialize};
use swp_core::Result;
use swp_math::Point3;

use crate::sample::Curve;
use crate::{eval_bezier, eval_bspline, eval_circle};

/// Input to one of the evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CurveSource {
    Bezier { points: Vec<Point3> },
    Bspline { points: Vec<Point3> },
    Circle { radius: f64 },
}

impl CurveSource {
    pub fn evaluate(&self, steps: u32) -> Result<Curve> {
        match self {
            CurveSource::Bezier { points } => eval_bezier(points, steps),
            CurveSource::Bspline { points } => eval_bspline(points, steps),
            CurveSource::Circle { radius } => eval_circle(*radius, steps),
        }
    }
}
