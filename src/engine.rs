//! Core rendering engine.
//!
//! The [`Engine`] owns the frame and depth buffers and the animation state of
//! the rotating cube. Each frame the caller runs [`Engine::update`] to advance
//! the animation, [`Engine::render`] to redraw, and [`Engine::frame_bytes`] to
//! fetch the result in a displayable pixel format.

use std::f32::consts::TAU;

use log::debug;

use crate::config::Config;
use crate::cube;
use crate::math::dyn_matrix::DynMatrix;
use crate::math::matrix::Matrix;
use crate::math::transform::{extend, rotation, translation};
use crate::math::vector::Vector;
use crate::projection::Projection;
use crate::render::blit::{blit_grey, blit_threshold, BYTES_PER_PIXEL};
use crate::render::line::draw_line;
use crate::render::rasterizer::{draw_triangle, draw_triangle_with_depth};

/// Grey level used to binarize the frame when monochrome output is enabled.
pub const MONOCHROME_THRESHOLD: u8 = 0x80;

/// Fraction of the foreground level a face receives with no direct light.
const AMBIENT: f32 = 0.2;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Cube edges only (key: 1)
    Wireframe,
    /// Filled faces, back faces culled (key: 2)
    Solid,
    /// Filled faces, occlusion resolved by the depth buffer (key: 3)
    #[default]
    SolidDepth,
}

impl RenderMode {
    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            RenderMode::Wireframe => RenderMode::Solid,
            RenderMode::Solid => RenderMode::SolidDepth,
            RenderMode::SolidDepth => RenderMode::Wireframe,
        }
    }
}

pub struct Engine {
    config: Config,
    projection: Projection,
    frame: DynMatrix<u8>,
    depth_buffer: DynMatrix<f32>,
    bytes: Vec<u8>,
    angle: f32,
    render_mode: RenderMode,
    threshold: Option<u8>,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        let (width, height) = (config.width(), config.height());
        Self {
            projection: Projection::new(config.focal_length(), width, height),
            frame: DynMatrix::filled(height as usize, width as usize, config.background()),
            depth_buffer: DynMatrix::filled(height as usize, width as usize, 0.0),
            bytes: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
            angle: 0.0,
            render_mode: config.render_mode(),
            threshold: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.frame.n_cols() as u32
    }

    pub fn height(&self) -> u32 {
        self.frame.n_rows() as u32
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if mode != self.render_mode {
            debug!("render mode {:?} -> {:?}", self.render_mode, mode);
        }
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn cycle_render_mode(&mut self) {
        self.set_render_mode(self.render_mode.next());
    }

    /// Switches between grey and black/white output.
    pub fn toggle_monochrome(&mut self) {
        self.threshold = match self.threshold {
            Some(_) => None,
            None => Some(MONOCHROME_THRESHOLD),
        };
        debug!("monochrome output: {}", self.threshold.is_some());
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let (rows, cols) = (height as usize, width as usize);
        self.frame = DynMatrix::filled(rows, cols, self.config.background());
        self.depth_buffer = DynMatrix::filled(rows, cols, 0.0);
        self.bytes = vec![0; rows * cols * BYTES_PER_PIXEL];
        self.projection.set_size(width, height);
    }

    /// The grey frame buffer, one byte per pixel.
    pub fn frame(&self) -> &DynMatrix<u8> {
        &self.frame
    }

    pub fn depth_buffer(&self) -> &DynMatrix<f32> {
        &self.depth_buffer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_bytes(&mut self) -> &[u8] {
        match self.threshold {
            Some(threshold) => blit_threshold(&self.frame, threshold, &mut self.bytes),
            None => blit_grey(&self.frame, &mut self.bytes),
        }
        &self.bytes
    }

    /// Advance the animation by one frame.
    pub fn update(&mut self) {
        self.set_angle(self.angle + self.config.angle_step());
    }

    /// Model-to-camera transform for the current angle.
    ///
    /// Pitch about `x`, then yaw about `y` applied first, then the cube is
    /// pushed `distance` along the view axis.
    pub fn model_matrix(&self) -> Matrix<f32, 4, 4> {
        let a = self.angle;
        let pitch = rotation(Vector::new([a, 0.0, 0.0]));
        let yaw = rotation(Vector::new([0.0, a * self.config.yaw_ratio(), 0.0]));
        translation(&Vector::new([0.0, 0.0, self.config.distance()])) * extend(&(pitch * yaw))
    }

    /// The cube's vertices in camera space.
    pub fn camera_vertices(&self) -> [Vector<f32, 3>; cube::N_VERTICES] {
        let model = self.model_matrix();
        cube::vertices().map(|v| (model * v.extend_with(1.0)).truncate())
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.frame.fill(self.config.background());
        self.depth_buffer.fill(0.0);

        let vertices = self.camera_vertices();
        match self.render_mode {
            RenderMode::Wireframe => self.render_wireframe(&vertices),
            RenderMode::Solid => self.render_solid(&vertices, false),
            RenderMode::SolidDepth => self.render_solid(&vertices, true),
        }
    }

    fn render_wireframe(&mut self, vertices: &[Vector<f32, 3>; cube::N_VERTICES]) {
        let near = self.config.near();
        let color = self.config.foreground();
        for (i, j) in cube::edges() {
            if vertices[i].z() < near || vertices[j].z() < near {
                continue;
            }
            let from = self.projection.project(vertices[i]);
            let to = self.projection.project(vertices[j]);
            draw_line(&mut self.frame, from, to, color);
        }
    }

    fn render_solid(&mut self, vertices: &[Vector<f32, 3>; cube::N_VERTICES], depth_test: bool) {
        let near = self.config.near();
        let max_depth = 1.0 / near;
        let centre = vertices.iter().fold(Vector::zero(), |acc, &v| acc + v) / cube::N_VERTICES as f32;

        for quad in cube::faces() {
            let corners = quad.map(|i| vertices[i]);
            if corners.iter().any(|v| v.z() < near) {
                continue;
            }
            let face_centre = corners.iter().fold(Vector::zero(), |acc, &v| acc + v) / 4.0;

            // Orient the normal away from the cube centre.
            let mut normal = (corners[1] - corners[0]).cross(&(corners[2] - corners[0]));
            if normal.dot(&(face_centre - centre)) < 0.0 {
                normal = -normal;
            }

            // In camera space the camera is at the origin, so the ray from the
            // face towards it is just -face_centre.
            if !depth_test && normal.dot(&-face_centre) <= 0.0 {
                continue;
            }

            let color = self.shade(normal);
            let depth = 1.0 / face_centre.z();
            let projected = quad.map(|i| self.projection.project(vertices[i]));

            for [a, b, c] in cube::triangulate(&[0, 1, 2, 3]) {
                let (a, b, c) = (projected[a], projected[b], projected[c]);
                if depth_test {
                    draw_triangle_with_depth(
                        &mut self.frame,
                        a,
                        b,
                        c,
                        color,
                        &mut self.depth_buffer,
                        max_depth,
                        depth,
                    );
                } else {
                    draw_triangle(&mut self.frame, a, b, c, color);
                }
            }
        }
    }

    /// Lambert shading against a light above and to the left of the camera.
    fn shade(&self, normal: Vector<f32, 3>) -> u8 {
        let to_light = Vector::new([-1.0f32, 1.0, -2.0]).normalize();
        let lambert = normal.normalize().dot(&to_light).max(0.0);
        let intensity = AMBIENT + (1.0 - AMBIENT) * lambert;
        (self.config.foreground() as f32 * intensity).round() as u8
    }
}
