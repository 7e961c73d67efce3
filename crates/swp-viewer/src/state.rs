//! Application state of the model viewer and the key/timer events that drive it.

use std::time::Duration;

use log::{debug, info};
use swp_math::Transform;

use crate::config::ViewerConfig;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

/// What the windowing layer should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Quit,
    Redraw,
    /// Rotation started: redraw, and call [`ViewerState::tick`] with this
    /// generation now and again each time it returns it.
    StartTimer { generation: u32 },
    Unhandled,
}

/// Largest square viewport centred in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn fit_square(width: u32, height: u32) -> Self {
        if width > height {
            Self {
                x: (width - height) / 2,
                y: 0,
                width: height,
                height,
            }
        } else {
            Self {
                x: 0,
                y: (height - width) / 2,
                width,
                height: width,
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    window_size: [u32; 2],
    window_position: [i32; 2],
    palette: Vec<[f32; 4]>,
    color: usize,
    specular: [f32; 4],
    shininess: f32,
    light: [i32; 2],
    light_z: f32,
    light_color: [f32; 4],
    rotation_speed: f64,
    tick_interval: Duration,
    rotating: bool,
    generation: u32,
    angle: f64,
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            window_size: config.window_size,
            window_position: config.window_position,
            palette: config.palette.clone(),
            color: 0,
            specular: config.specular,
            shininess: config.shininess,
            light: config.light_start,
            light_z: config.light_z,
            light_color: config.light_color,
            rotation_speed: config.rotation_speed,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            rotating: false,
            generation: 0,
            angle: 0.0,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Escape => KeyResponse::Quit,
            Key::Char('c') => {
                self.color = (self.color + 1) % self.palette.len().max(1);
                KeyResponse::Redraw
            }
            Key::Char('r') => {
                self.rotating = !self.rotating;
                if self.rotating {
                    info!("Started rotating.");
                    KeyResponse::StartTimer {
                        generation: self.generation,
                    }
                } else {
                    // Orphan the running timer.
                    self.generation = self.generation.wrapping_add(1);
                    info!("Stopped rotating.");
                    KeyResponse::Redraw
                }
            }
            Key::Up => self.move_light(0, 1),
            Key::Down => self.move_light(0, -1),
            Key::Left => self.move_light(-1, 0),
            Key::Right => self.move_light(1, 0),
            Key::Char(_) => {
                debug!("Unhandled key press {:?}.", key);
                KeyResponse::Unhandled
            }
        }
    }

    fn move_light(&mut self, dx: i32, dy: i32) -> KeyResponse {
        self.light[0] += dx;
        self.light[1] += dy;
        KeyResponse::Redraw
    }

    /// Rotation timer callback.
    ///
    /// Returns the generation to schedule the next tick with, or `None` when
    /// the timer belongs to a rotation that has since been stopped.
    pub fn tick(&mut self, generation: u32) -> Option<u32> {
        if !self.rotating || generation != self.generation {
            return None;
        }
        self.angle = (self.angle + self.rotation_speed) % 360.0;
        Some(generation)
    }

    pub fn diffuse_color(&self) -> [f32; 4] {
        self.palette.get(self.color).copied().unwrap_or([1.0; 4])
    }

    pub fn color_index(&self) -> usize {
        self.color
    }

    pub fn specular(&self) -> [f32; 4] {
        self.specular
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Homogeneous light position.
    pub fn light_position(&self) -> [f32; 4] {
        [self.light[0] as f32, self.light[1] as f32, self.light_z, 1.0]
    }

    /// Diffuse colour of the light.
    pub fn light_color(&self) -> [f32; 4] {
        self.light_color
    }

    /// Initial window size in pixels.
    pub fn window_size(&self) -> [u32; 2] {
        self.window_size
    }

    pub fn window_position(&self) -> [i32; 2] {
        self.window_position
    }

    /// Delay between rotation ticks.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Current rotation about +Y in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn model_transform(&self) -> Transform {
        Transform::from_rotation_y_degrees(self.angle)
    }
}
