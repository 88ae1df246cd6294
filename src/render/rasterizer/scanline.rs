//! Scanline-based triangle rasterization.
//!
//! Triangles are filled one horizontal pixel row at a time using the classic
//! flat-top/flat-bottom decomposition.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** at the middle vertex into an upper half (flat bottom) and a
//!    lower half (flat top)
//! 3. **Walk** each half row by row, computing the left/right X boundaries
//!    along its two edges
//!
//! ```text
//!        A                    A
//!        /\                   /\
//!       /  \                 /  \        upper half: edges A->B, A->C
//!      /    \       =>    B /----\
//!   B /      \              \    |
//!     \       \              \   |       lower half: edges B->C, A->C
//!      \_      \              \_  \
//!        \_     \               \_ \
//!          \_____\                \_\
//!                 C                  C
//! ```
//!
//! Either half is skipped when it has zero height, and a triangle whose three
//! vertices share one Y coordinate covers no pixels.
//!
//! # Inverse Slope Method
//!
//! Each edge is described by the change in X per unit Y:
//!
//! ```text
//! step = (x_end - x_start) / (y_end - y_start)
//! ```
//!
//! and on row `y` the boundary sits at `x_anchor + step * (y - y_anchor)`.
//! The upper half is anchored at A, the lower half at C. In the upper half the
//! smaller step is the left edge; in the lower half, walking towards C from
//! above, the roles flip and the larger step is the left edge.
//!
//! # Pixel Coverage
//!
//! A pixel row `y` belongs to a half when `ceil(top) <= y < ceil(bottom)`, and
//! a pixel `x` belongs to a row span when `ceil(left) <= x < ceil(right)`. Two
//! triangles sharing an edge therefore never write the same pixel twice.
//! Rows and spans are clipped to the target, so partially off-screen
//! triangles are safe to draw.

use super::sink::PixelSink;
use crate::math::dyn_matrix::DynMatrix;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

/// Sorts three points by ascending Y.
///
/// Three compare-and-swap steps suffice; points only swap when strictly out
/// of order, so equal Y values keep their input order.
fn sort_by_y<S: Scalar>(mut points: [Vector<S, 2>; 3]) -> [Vector<S, 2>; 3] {
    if points[1].y() < points[0].y() {
        points.swap(0, 1);
    }
    if points[2].y() < points[1].y() {
        points.swap(1, 2);
    }
    if points[1].y() < points[0].y() {
        points.swap(0, 1);
    }
    points
}

/// Hands every pixel in `[left, right)` of row `y` to the sink, clipped to the
/// row width.
#[inline]
fn fill_span<T, P>(img: &mut DynMatrix<T>, y: usize, left: isize, right: isize, sink: &mut P)
where
    P: PixelSink<T> + ?Sized,
{
    let right = right.min(img.n_cols() as isize);
    let left = left.max(0);
    for x in left..right {
        sink.set_pixel(img, x as usize, y);
    }
}

/// Fills rows `ceil(top) .. ceil(bottom)` between two edges meeting at
/// `anchor`.
///
/// `left_step` and `right_step` are the inverse slopes of the left and right
/// boundary. Rows outside the target are skipped, the interpolation starts at
/// the first visible row.
fn fill_half<T, S, P>(
    img: &mut DynMatrix<T>,
    anchor: Vector<S, 2>,
    top: S,
    bottom: S,
    left_step: S,
    right_step: S,
    sink: &mut P,
) where
    S: Scalar,
    P: PixelSink<T> + ?Sized,
{
    let first_row = top.ceil().to_isize().max(0);
    let end_row = bottom.ceil().to_isize().min(img.n_rows() as isize);

    for y in first_row..end_row {
        let dy = S::from_isize(y) - anchor.y();
        let left = anchor.x() + left_step * dy;
        let right = anchor.x() + right_step * dy;
        fill_span(
            img,
            y as usize,
            left.ceil().to_isize(),
            right.ceil().to_isize(),
            sink,
        );
    }
}

/// Fills the triangle `a`, `b`, `c` (screen space, any winding) into `img`,
/// delegating each covered pixel to `sink`.
pub fn fill_triangle<T, S, P>(
    img: &mut DynMatrix<T>,
    a: Vector<S, 2>,
    b: Vector<S, 2>,
    c: Vector<S, 2>,
    sink: &mut P,
) where
    S: Scalar,
    P: PixelSink<T> + ?Sized,
{
    let [a, b, c] = sort_by_y([a, b, c]);
    if a.y() == c.y() {
        return;
    }

    // Long edge A->C borders both halves.
    let step_ac = (c.x() - a.x()) / (c.y() - a.y());

    if a.y() != b.y() {
        let step_ab = (b.x() - a.x()) / (b.y() - a.y());
        fill_half(
            img,
            a,
            a.y(),
            b.y(),
            step_ab.min(step_ac),
            step_ab.max(step_ac),
            sink,
        );
    }

    if b.y() != c.y() {
        let step_bc = (c.x() - b.x()) / (c.y() - b.y());
        fill_half(
            img,
            c,
            b.y(),
            c.y(),
            step_ac.max(step_bc),
            step_ac.min(step_bc),
            sink,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterizer::sink::FlatFill;

    fn v(x: f32, y: f32) -> Vector<f32, 2> {
        Vector::new([x, y])
    }

    fn covered(img: &DynMatrix<u8>) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (y, row) in img.rows().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn sort_is_stable_for_equal_y() {
        let sorted = sort_by_y([v(4.0, 1.0), v(0.0, 0.0), v(2.0, 1.0)]);
        assert_eq!(sorted, [v(0.0, 0.0), v(4.0, 1.0), v(2.0, 1.0)]);
    }

    #[test]
    fn sort_handles_reverse_order() {
        let sorted = sort_by_y([v(0.0, 3.0), v(0.0, 2.0), v(0.0, 1.0)]);
        assert_eq!(sorted, [v(0.0, 1.0), v(0.0, 2.0), v(0.0, 3.0)]);
    }

    #[test]
    fn right_triangle_covers_lower_left() {
        let mut img = DynMatrix::filled(6, 6, 0u8);
        fill_triangle(&mut img, v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0), &mut FlatFill { color: 1 });

        let mut expected = Vec::new();
        for y in 0..4 {
            for x in 0..4 - y {
                expected.push((x, y));
            }
        }
        assert_eq!(covered(&img), expected);
    }

    #[test]
    fn winding_does_not_matter() {
        let mut a = DynMatrix::filled(8, 8, 0u8);
        let mut b = DynMatrix::filled(8, 8, 0u8);
        fill_triangle(&mut a, v(1.0, 1.0), v(6.5, 2.0), v(3.0, 7.0), &mut FlatFill { color: 1 });
        fill_triangle(&mut b, v(3.0, 7.0), v(6.5, 2.0), v(1.0, 1.0), &mut FlatFill { color: 1 });
        assert_eq!(a, b);
        assert!(!covered(&a).is_empty());
    }

    #[test]
    fn general_triangle_uses_both_halves() {
        let mut img = DynMatrix::filled(10, 10, 0u8);
        // B sits to the right at mid height: rows above and below B are filled.
        fill_triangle(&mut img, v(1.0, 0.0), v(8.0, 4.0), v(1.0, 9.0), &mut FlatFill { color: 1 });

        // Row 0 only touches the apex, which lies on a left boundary.
        let rows: Vec<usize> = (0..10).filter(|&y| img[y].iter().any(|&p| p != 0)).collect();
        assert_eq!(rows, (1..9).collect::<Vec<_>>());
        // Widest row is the one through B.
        let widths: Vec<usize> = (0..10).map(|y| img[y].iter().filter(|&&p| p != 0).count()).collect();
        let widest = widths.iter().copied().max().unwrap();
        assert_eq!(widths[4], widest);
        // Left edge is the vertical line x = 1.
        for y in 1..9 {
            assert_eq!(img[y][0], 0);
            assert_eq!(img[y][1], 1);
        }
    }

    #[test]
    fn flat_top_triangle() {
        let mut img = DynMatrix::filled(5, 5, 0u8);
        fill_triangle(&mut img, v(0.0, 0.0), v(4.0, 0.0), v(2.0, 4.0), &mut FlatFill { color: 1 });
        // Row 0 spans [0, 4), narrowing by one pixel per side every two rows.
        assert_eq!(&img[0][..], &[1, 1, 1, 1, 0]);
        assert_eq!(&img[2][..], &[0, 1, 1, 0, 0]);
        assert!(img[4].iter().all(|&p| p == 0));
    }

    #[test]
    fn shared_edge_is_written_once() {
        let mut img = DynMatrix::filled(7, 7, 0u8);
        let mut sink = |img: &mut DynMatrix<u8>, x: usize, y: usize| img[y][x] += 1;
        fill_triangle(&mut img, v(0.0, 0.0), v(7.0, 0.0), v(0.0, 7.0), &mut sink);
        fill_triangle(&mut img, v(7.0, 0.0), v(7.0, 7.0), v(0.0, 7.0), &mut sink);
        assert!(img.as_slice().iter().all(|&p| p == 1));
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        let mut calls = 0;
        let mut sink = |_: &mut DynMatrix<u8>, _: usize, _: usize| calls += 1;
        fill_triangle(&mut img, v(0.0, 2.0), v(3.0, 2.0), v(1.5, 2.0), &mut sink);
        assert_eq!(calls, 0);
    }

    #[test]
    fn clips_horizontally() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        fill_triangle(&mut img, v(-10.0, 0.0), v(20.0, 0.0), v(2.0, 4.0), &mut FlatFill { color: 1 });
        assert!(img[0].iter().all(|&p| p == 1));
    }

    #[test]
    fn clips_vertically() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        fill_triangle(&mut img, v(-8.0, -8.0), v(12.0, -8.0), v(2.0, 12.0), &mut FlatFill { color: 1 });
        // Rows above and below the target are skipped without panicking.
        assert!(img[0].iter().any(|&p| p == 1));
        assert!(img[3].iter().any(|&p| p == 1));
    }

    #[test]
    fn fully_off_screen_draws_nothing() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        fill_triangle(&mut img, v(0.0, 10.0), v(3.0, 10.0), v(1.0, 14.0), &mut FlatFill { color: 1 });
        fill_triangle(&mut img, v(-9.0, 0.0), v(-5.0, 0.0), v(-7.0, 3.0), &mut FlatFill { color: 1 });
        assert!(covered(&img).is_empty());
    }
}
