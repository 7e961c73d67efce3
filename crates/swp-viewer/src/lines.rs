//! Line geometry for drawing a sampled curve.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use swp_curve::Curve;
use swp_math::{Point3, Vector3};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Point3, color: [f32; 4]) -> Self {
        Self {
            position: position.as_vec3().to_array(),
            color,
        }
    }

    /// View a vertex array as raw bytes for GPU upload.
    pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// White line strip through every sample position, in order.
pub fn curve_line_strip(curve: &Curve) -> Vec<LineVertex> {
    curve.positions().map(|p| LineVertex::new(p, WHITE)).collect()
}

/// Line list with one coordinate frame per sample: N in red, B in green
/// and T in blue, each `frame_size` long.
///
/// Returns nothing when `frame_size` is zero.
pub fn frame_gizmos(curve: &Curve, frame_size: f64) -> Vec<LineVertex> {
    if frame_size == 0.0 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(curve.len() * 6);
    for sample in curve {
        let frame = sample.frame_transform();
        let origin = frame.transform_point(Point3::ZERO);
        for (axis, color) in [(Vector3::X, RED), (Vector3::Y, GREEN), (Vector3::Z, BLUE)] {
            vertices.push(LineVertex::new(origin, color));
            vertices.push(LineVertex::new(frame.transform_point(axis * frame_size), color));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use swp_curve::eval_circle;

    #[test]
    fn test_line_strip_follows_positions() {
        let curve = eval_circle(2.0, 4).unwrap();
        let strip = curve_line_strip(&curve);
        assert_eq!(strip.len(), 5);
        assert_eq!(strip[0].position, [2.0, 0.0, 0.0]);
        assert!(strip.iter().all(|v| v.color == WHITE));
    }

    #[test]
    fn test_gizmo_axes() {
        let curve = eval_circle(1.0, 4).unwrap();
        let gizmos = frame_gizmos(&curve, 0.5);
        assert_eq!(gizmos.len(), 5 * 6);

        // First sample: V = (1,0,0), N = (-1,0,0), B = +Z, T = +Y
        let expect = [
            ([0.5, 0.0, 0.0], RED),
            ([1.0, 0.0, 0.5], GREEN),
            ([1.0, 0.5, 0.0], BLUE),
        ];
        for (i, (tip, color)) in expect.iter().enumerate() {
            let start = gizmos[2 * i];
            let end = gizmos[2 * i + 1];
            assert_eq!(start.position, [1.0, 0.0, 0.0]);
            assert_eq!(start.color, *color);
            for k in 0..3 {
                assert!((end.position[k] - tip[k]).abs() < 1e-6, "axis {} tip {:?}", i, end.position);
            }
        }
    }

    #[test]
    fn test_zero_frame_size_draws_nothing() {
        let curve = eval_circle(1.0, 8).unwrap();
        assert!(frame_gizmos(&curve, 0.0).is_empty());
    }

    #[test]
    fn test_as_bytes_length() {
        let curve = eval_circle(1.0, 3).unwrap();
        let strip = curve_line_strip(&curve);
        assert_eq!(LineVertex::as_bytes(&strip).len(), strip.len() * 28);
    }
}
