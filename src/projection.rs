//! Pinhole perspective projection.
//!
//! The camera sits at the origin looking down `+z`, with `+y` up. Screen space
//! has its origin in the top-left corner and `y` growing downwards.

use crate::math::vector::Vector;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Focal length relative to half the shorter screen side. A point at
    /// `x / z = 1` lands `focal_length` half-sides away from the centre.
    focal_length: f32,
    width: u32,
    height: u32,
}

impl Projection {
    /// Creates a new projection for a `width` x `height` screen.
    ///
    /// # Arguments
    /// * `focal_length` - Focal length in half-screen units (must be > 0)
    /// * `width`, `height` - Target size in pixels
    pub fn new(focal_length: f32, width: u32, height: u32) -> Self {
        Self {
            focal_length,
            width,
            height,
        }
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Updates the screen size (typically called on window resize).
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Focal length in pixels.
    pub fn scale(&self) -> f32 {
        self.focal_length * self.width.min(self.height) as f32 / 2.0
    }

    pub fn center(&self) -> Vector<f32, 2> {
        Vector::new([self.width as f32 / 2.0, self.height as f32 / 2.0])
    }

    /// Projects a camera-space point onto the screen.
    ///
    /// Points with `z <= 0` are behind the camera; the result is then
    /// meaningless (or infinite for `z == 0`) and callers must not draw it.
    pub fn project(&self, p: Vector<f32, 3>) -> Vector<f32, 2> {
        let f = self.scale();
        let c = self.center();
        Vector::new([c.x() + f * p.x() / p.z(), c.y() - f * p.y() / p.z()])
    }
}
