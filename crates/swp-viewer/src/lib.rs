pub mod camera;
pub mod config;
pub mod lines;
pub mod state;

// Re-export main types
pub use camera::Camera;
pub use config::{CameraConfig, ViewerConfig};
pub use lines::{curve_line_strip, frame_gizmos, LineVertex};
pub use state::{Key, KeyResponse, ViewerState, Viewport};
