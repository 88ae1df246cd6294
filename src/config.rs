//! Demo configuration.
//!
//! [`Config`] collects every tunable of the rotating cube demo. Mutating
//! methods return `&mut Self` for chaining:
//!
//! ```ignore
//! let mut config = Config::default();
//! config
//!     .set_size(1024, 768)
//!     .set_angle_step(0.05)
//!     .set_render_mode(RenderMode::Wireframe);
//! ```

use std::time::Duration;

use crate::engine::RenderMode;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// One frame every 40 ms, i.e. 25 frames per second.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    width: u32,
    height: u32,
    frame_interval: Duration,
    /// Radians added to the animation angle every frame.
    angle_step: f32,
    /// Yaw speed relative to pitch speed.
    yaw_ratio: f32,
    /// Distance from the camera to the cube centre along `+z`.
    distance: f32,
    focal_length: f32,
    near: f32,
    background: u8,
    foreground: u8,
    render_mode: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            angle_step: 0.03,
            yaw_ratio: 0.7,
            distance: 5.0,
            focal_length: 2.0,
            near: 0.1,
            background: 0x00,
            foreground: 0xFF,
            render_mode: RenderMode::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Window ============

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn set_frame_interval(&mut self, interval: Duration) -> &mut Self {
        self.frame_interval = interval;
        self
    }

    // ============ Animation ============

    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    pub fn set_angle_step(&mut self, step: f32) -> &mut Self {
        self.angle_step = step;
        self
    }

    pub fn yaw_ratio(&self) -> f32 {
        self.yaw_ratio
    }

    pub fn set_yaw_ratio(&mut self, ratio: f32) -> &mut Self {
        self.yaw_ratio = ratio;
        self
    }

    // ============ Camera ============

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) -> &mut Self {
        self.distance = distance;
        self
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn set_focal_length(&mut self, focal_length: f32) -> &mut Self {
        self.focal_length = focal_length;
        self
    }

    /// Closest camera-space `z` that may still be drawn.
    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn set_near(&mut self, near: f32) -> &mut Self {
        self.near = near;
        self
    }

    // ============ Appearance ============

    pub fn background(&self) -> u8 {
        self.background
    }

    pub fn set_background(&mut self, grey: u8) -> &mut Self {
        self.background = grey;
        self
    }

    /// Grey level of wireframe lines and fully lit faces.
    pub fn foreground(&self) -> u8 {
        self.foreground
    }

    pub fn set_foreground(&mut self, grey: u8) -> &mut Self {
        self.foreground = grey;
        self
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) -> &mut Self {
        self.render_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.width(), config.height()), (800, 600));
        assert_eq!(config.frame_interval(), Duration::from_millis(40));
        assert_eq!(config.render_mode(), RenderMode::SolidDepth);
        assert!(config.distance() > config.near());
    }

    #[test]
    fn setters_chain() {
        let mut config = Config::new();
        config
            .set_size(320, 200)
            .set_angle_step(0.5)
            .set_background(7)
            .set_render_mode(RenderMode::Wireframe);
        assert_eq!(config.width(), 320);
        assert_eq!(config.height(), 200);
        assert_eq!(config.angle_step(), 0.5);
        assert_eq!(config.background(), 7);
        assert_eq!(config.render_mode(), RenderMode::Wireframe);
    }
}
