//! Piecewise curve evaluation.
//!
//! Every evaluator returns a fresh [`Curve`]: an ordered list of samples,
//! each carrying a position and a tangent/normal/binormal frame. Bezier
//! curves are evaluated segment by segment, carrying the binormal from one
//! segment into the next so the frame never twists at a join. B-splines are
//! converted to Bezier control points first and share that machinery.

mod basis;
pub mod bezier;
pub mod bspline;
pub mod circle;
pub mod frame;
pub mod sample;
pub mod source;

pub use bezier::{bezier_segments, eval_bezier, BezierSegment, SegmentSamples};
pub use bspline::{bspline_to_bezier, eval_bspline};
pub use circle::eval_circle;
pub use frame::{FrameTransport, UP};
pub use sample::{Curve, CurveSample};
pub use source::CurveSource;

use swp_core::{Basis, Result, SwpError};

fn check_steps(basis: Basis, steps: u32) -> Result<()> {
    if steps == 0 {
        log::warn!("rejecting {} evaluation with zero steps", basis);
        return Err(SwpError::InvalidSteps { basis });
    }
    Ok(())
}
