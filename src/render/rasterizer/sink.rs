//! Per-pixel write strategies plugged into the scanline walker.

use crate::math::dyn_matrix::DynMatrix;
use crate::math::scalar::Scalar;

/// Decides how a covered pixel is written.
///
/// The scanline walker only computes coverage; everything about the actual
/// write (plain overwrite, depth test, blending) lives behind this trait.
/// Closures `FnMut(&mut DynMatrix<T>, usize, usize)` implement it too.
pub trait PixelSink<T> {
    fn set_pixel(&mut self, img: &mut DynMatrix<T>, x: usize, y: usize);
}

impl<T, F> PixelSink<T> for F
where
    F: FnMut(&mut DynMatrix<T>, usize, usize),
{
    #[inline]
    fn set_pixel(&mut self, img: &mut DynMatrix<T>, x: usize, y: usize) {
        self(img, x, y)
    }
}

/// Overwrites every covered pixel with one color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatFill<T> {
    pub color: T,
}

impl<T: Copy> PixelSink<T> for FlatFill<T> {
    #[inline]
    fn set_pixel(&mut self, img: &mut DynMatrix<T>, x: usize, y: usize) {
        img[y][x] = self.color;
    }
}

/// Writes `color` only where `depth` wins against the depth buffer.
///
/// Larger depth values are nearer. A pixel is written when `depth` is below
/// `max_depth` (the near limit) and strictly greater than the stored value,
/// which is then replaced by `depth`.
///
/// The depth is one constant for the whole triangle, not interpolated per
/// pixel. That resolves occlusion between the flat faces of a convex solid
/// but not between intersecting or long, tilted triangles.
#[derive(Debug)]
pub struct DepthTestedFill<'a, T, S> {
    pub color: T,
    pub depth_buffer: &'a mut DynMatrix<S>,
    pub max_depth: S,
    pub depth: S,
}

impl<T: Copy, S: Scalar> PixelSink<T> for DepthTestedFill<'_, T, S> {
    #[inline]
    fn set_pixel(&mut self, img: &mut DynMatrix<T>, x: usize, y: usize) {
        let current = &mut self.depth_buffer[y][x];
        if self.depth >= self.max_depth || self.depth <= *current {
            return;
        }
        *current = self.depth;
        img[y][x] = self.color;
    }
}
