//! Triangle rasterization.
//!
//! [`fill_triangle`] walks the pixels covered by a screen-space triangle and
//! hands each one to a [`PixelSink`]. The two entry points below pick the sink:
//!
//! - [`draw_triangle`]: plain color fill
//! - [`draw_triangle_with_depth`]: color fill gated by a z-buffer

mod scanline;
mod sink;

pub use scanline::fill_triangle;
pub use sink::{DepthTestedFill, FlatFill, PixelSink};

use crate::math::dyn_matrix::DynMatrix;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

/// Fill a triangle with a solid color.
///
/// # Arguments
/// * `img` - The frame buffer to draw into
/// * `a`, `b`, `c` - Screen-space vertices, any order
/// * `color` - The value written to every covered pixel
pub fn draw_triangle<T: Copy, S: Scalar>(
    img: &mut DynMatrix<T>,
    a: Vector<S, 2>,
    b: Vector<S, 2>,
    c: Vector<S, 2>,
    color: T,
) {
    fill_triangle(img, a, b, c, &mut FlatFill { color });
}

/// Fill a triangle with a solid color, keeping only pixels where `depth` is
/// nearer than what the depth buffer holds.
///
/// Larger depth values are nearer. `depth` must also stay below `max_depth`
/// (the near limit) for anything to be written. See [`DepthTestedFill`].
///
/// # Panics
/// In debug builds, panics if `depth_buffer` and `img` differ in shape.
#[allow(clippy::too_many_arguments)]
pub fn draw_triangle_with_depth<T: Copy, S: Scalar>(
    img: &mut DynMatrix<T>,
    a: Vector<S, 2>,
    b: Vector<S, 2>,
    c: Vector<S, 2>,
    color: T,
    depth_buffer: &mut DynMatrix<S>,
    max_depth: S,
    depth: S,
) {
    debug_assert_eq!(
        img.shape(),
        depth_buffer.shape(),
        "Depth buffer size doesn't match frame buffer"
    );
    fill_triangle(
        img,
        a,
        b,
        c,
        &mut DepthTestedFill {
            color,
            depth_buffer,
            max_depth,
            depth,
        },
    );
}
