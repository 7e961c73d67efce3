//! Viewer configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use swp_core::{Result, SwpError};
use swp_math::{DVec3, Point3, Vector3};

/// Perspective camera placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 5.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_y_degrees: 50.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Everything the viewer used to keep in process-wide globals.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_size: [u32; 2],
    pub window_position: [i32; 2],
    /// Diffuse colours cycled by the `c` key
    pub palette: Vec<[f32; 4]>,
    pub specular: [f32; 4],
    pub shininess: f32,
    pub light_color: [f32; 4],
    /// Initial light x/y, moved one unit per arrow key
    pub light_start: [i32; 2],
    pub light_z: f32,
    /// Degrees turned per timer tick
    pub rotation_speed: f64,
    pub tick_interval_ms: u64,
    /// Length of the frame gizmos drawn at curve samples, 0 disables them
    pub frame_size: f64,
    pub camera: CameraConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [360, 360],
            window_position: [60, 60],
            palette: vec![
                [0.5, 0.5, 0.9, 1.0],
                [0.9, 0.5, 0.5, 1.0],
                [0.5, 0.9, 0.3, 1.0],
                [0.3, 0.8, 0.9, 1.0],
            ],
            specular: [1.0, 1.0, 1.0, 1.0],
            shininess: 100.0,
            light_color: [1.0, 1.0, 1.0, 1.0],
            light_start: [1, 1],
            light_z: 5.0,
            rotation_speed: 1.0,
            tick_interval_ms: 1000 / 60,
            frame_size: 0.1,
            camera: CameraConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SwpError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading viewer config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    fn check(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(SwpError::Config("palette must contain at least one colour".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(SwpError::Config("tick_interval_ms must be positive".into()));
        }
        if self.frame_size < 0.0 {
            return Err(SwpError::Config(format!(
                "frame_size must not be negative, got {}",
                self.frame_size
            )));
        }
        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(SwpError::Config(format!(
                "camera clip planes must satisfy 0 < near < far, got near {} far {}",
                camera.near, camera.far
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_viewer() {
        let config = ViewerConfig::default();
        assert_eq!(config.window_size, [360, 360]);
        assert_eq!(config.palette.len(), 4);
        assert_eq!(config.tick_interval_ms, 16);
        assert_eq!(config.camera.fov_y_degrees, 50.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{"rotation_speed": 2.5, "camera": {"near": 0.5}}"#)
            .unwrap();
        assert_eq!(config.rotation_speed, 2.5);
        assert_eq!(config.camera.near, 0.5);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.light_start, [1, 1]);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = ViewerConfig::from_json(r#"{"palette": []}"#).unwrap_err();
        assert!(matches!(err, SwpError::Config(_)));
    }

    #[test]
    fn test_bad_clip_planes_rejected() {
        let err = ViewerConfig::from_json(r#"{"camera": {"near": 10.0, "far": 1.0}}"#).unwrap_err();
        assert!(err.to_string().contains("near"), "{}", err);
    }

    #[test]
    fn test_malformed_json() {
        let err = ViewerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SwpError::Config(_)));
    }
}
