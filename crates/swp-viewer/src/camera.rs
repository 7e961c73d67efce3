use swp_math::{Aabb3, DMat4, Point3, Vector3};

use crate::config::CameraConfig;

/// A 3D perspective camera with look-at controls.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3,       // camera position
    pub target: Point3,    // look-at target
    pub up: Vector3,       // up vector
    pub fov_y: f64,        // vertical FOV in radians
    pub aspect: f64,       // width/height
    pub near: f64,         // near clip plane
    pub far: f64,          // far clip plane
}

impl Camera {
    /// Camera for a square viewport as described by `config`.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye: config.eye,
            target: config.target,
            up: config.up,
            fov_y: config.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: config.near,
            far: config.far,
        }
    }

    /// World to camera space; the camera looks down -Z.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with OpenGL-style NDC (-1 to 1 for Z).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Adjust camera to fit an AABB in view, keeping the view direction.
    pub fn fit_to_aabb(&mut self, aabb: &Aabb3) {
        let center = aabb.center();
        let max_dim = aabb.max_extent();

        // Distance needed for the largest side to fill the field of view
        let distance = max_dim / (2.0 * (self.fov_y / 2.0).tan());

        let view_dir = (self.target - self.eye).normalize();
        self.target = center;
        self.eye = center - view_dir * (distance * 1.5).max(self.near * 2.0); // 1.5x for padding
    }
}

impl Default for Camera {
    /// Eye at (0, 0, 5) looking at the origin, 50° FOV, square aspect.
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swp_math::{dvec3, DVec4};

    #[test]
    fn test_default_camera() {
        let cam = Camera::default();
        assert_eq!(cam.eye, Point3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.target, Point3::ZERO);
        assert_eq!(cam.up, Vector3::Y);
        assert!((cam.fov_y - 50f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_view_matrix_puts_target_ahead() {
        let cam = Camera::default();
        let p = cam.view_matrix().transform_point3(Point3::ZERO);
        assert!((p - dvec3(0.0, 0.0, -5.0)).length() < 1e-10);
    }

    #[test]
    fn test_projection_depth_range() {
        let cam = Camera::default();
        let proj = cam.projection_matrix();
        let near = proj * DVec4::new(0.0, 0.0, -cam.near, 1.0);
        let far = proj * DVec4::new(0.0, 0.0, -cam.far, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-10);
        assert!((far.z / far.w - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_view_projection_centers_target() {
        let cam = Camera::default();
        let clip = cam.view_projection() * DVec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-10 && clip.y.abs() < 1e-10);
        assert!(clip.w > 0.0);
    }

    #[test]
    fn test_fit_to_aabb() {
        let mut cam = Camera::default();
        let aabb = Aabb3::new(Point3::new(-2.0, -2.0, -2.0), Point3::new(4.0, 2.0, 2.0));

        cam.fit_to_aabb(&aabb);

        assert_eq!(cam.target, Point3::new(1.0, 0.0, 0.0));
        let distance = (cam.eye - cam.target).length();
        assert!(distance > 6.0);
        // View direction is unchanged
        assert!(((cam.target - cam.eye).normalize() - -Vector3::Z).length() < 1e-10);
    }
}
