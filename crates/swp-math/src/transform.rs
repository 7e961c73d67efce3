use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine transform stored as a column-major 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    /// Rotation about +Y by `degrees`, counterclockwise looking down -Y.
    pub fn from_rotation_y_degrees(degrees: f64) -> Self {
        Self::from_mat4(DMat4::from_rotation_y(degrees.to_radians()))
    }

    /// Local frame placed at `origin` whose x/y/z axes map to the given vectors.
    pub fn from_frame(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, origin: Point3) -> Self {
        Self::from_mat4(DMat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            origin.extend(1.0),
        ))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }
}
