//! Line drawing for wireframe rendering.

use crate::math::dyn_matrix::DynMatrix;
use crate::math::vector::Vector;

/// Draws a line between two screen-space points using Bresenham's algorithm.
///
/// The segment is first clipped to the target, so lines may start or end
/// arbitrarily far off-screen and only the visible part is walked. End points
/// are then rounded to the nearest pixel and both are included. A segment
/// with a NaN or infinite coordinate draws nothing.
///
/// Bresenham's algorithm walks the major axis one pixel at a time and tracks
/// an integer error term measuring the distance to the ideal line. Whenever
/// the error crosses a threshold it also steps along the minor axis.
pub fn draw_line<T: Copy>(img: &mut DynMatrix<T>, from: Vector<f32, 2>, to: Vector<f32, 2>, color: T) {
    let (n_rows, n_cols) = img.shape();
    if n_rows == 0 || n_cols == 0 {
        return;
    }
    let Some([x0, y0, x1, y1]) = clip_segment(from, to, n_cols, n_rows) else {
        return;
    };

    // Clipped points lie within half a pixel of the target, so rounding can
    // only overshoot by one.
    let to_pixel = |v: f64, n: usize| (v.round() as i64).clamp(0, n as i64 - 1);
    let (x0, y0) = (to_pixel(x0, n_cols), to_pixel(y0, n_rows));
    let (x1, y1) = (to_pixel(x1, n_cols), to_pixel(y1, n_rows));

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let x_incr_direction = if x0 < x1 { 1 } else { -1 };
    let y_incr_direction = if y0 < y1 { 1 } else { -1 };

    // Positive error favors stepping in x, negative favors y.
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        img[y as usize][x as usize] = color;

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_incr_direction;
        }
        // Both branches may fire, which makes a diagonal step.
        if e2 < dx {
            err += dx;
            y += y_incr_direction;
        }
    }
}

/// Liang-Barsky clipping of `from -> to` against the pixel-centre rectangle
/// `[-0.5, n_cols - 0.5] x [-0.5, n_rows - 0.5]`.
///
/// Works in `f64` so that differences of extreme `f32` coordinates stay
/// finite. Returns `[x0, y0, x1, y1]` of the visible part, or `None` when
/// nothing is visible or a coordinate is not finite.
fn clip_segment(from: Vector<f32, 2>, to: Vector<f32, 2>, n_cols: usize, n_rows: usize) -> Option<[f64; 4]> {
    let coords = [from.x(), from.y(), to.x(), to.y()];
    if !coords.iter().all(|c| c.is_finite()) {
        return None;
    }
    let [x0, y0, x1, y1] = coords.map(f64::from);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let (x_max, y_max) = (n_cols as f64 - 0.5, n_rows as f64 - 0.5);

    let mut t_enter = 0.0f64;
    let mut t_exit = 1.0f64;
    for (p, q) in [(-dx, x0 + 0.5), (dx, x_max - x0), (-dy, y0 + 0.5), (dy, y_max - y0)] {
        if p == 0.0 {
            // Parallel to this edge: either fully inside or fully outside it.
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
        }
    }
    if t_enter > t_exit {
        return None;
    }

    Some([x0 + t_enter * dx, y0 + t_enter * dy, x0 + t_exit * dx, y0 + t_exit * dy])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector<f32, 2> {
        Vector::new([x, y])
    }

    fn lit(img: &DynMatrix<u8>) -> Vec<(usize, usize)> {
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
    fn horizontal_line_includes_end_points() {
        let mut img = DynMatrix::filled(3, 6, 0u8);
        draw_line(&mut img, v(1.0, 1.0), v(4.0, 1.0), 1);
        assert_eq!(lit(&img), vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn diagonal_line() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(3.0, 3.0), v(0.0, 0.0), 1);
        assert_eq!(lit(&img), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let mut img = DynMatrix::filled(8, 8, 0u8);
        draw_line(&mut img, v(1.0, 0.0), v(3.0, 7.0), 1);
        for row in img.rows() {
            assert_eq!(row.iter().filter(|&&p| p != 0).count(), 1);
        }
    }

    #[test]
    fn single_point() {
        let mut img = DynMatrix::filled(2, 2, 0u8);
        draw_line(&mut img, v(1.2, 0.9), v(0.8, 1.1), 5);
        assert_eq!(img[1][1], 5);
        assert_eq!(lit(&img).len(), 1);
    }

    #[test]
    fn extreme_end_points_are_clipped() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(0.0, 0.0), v(f32::MAX, 0.0), 1);
        assert_eq!(lit(&img), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);

        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(0.0, 3.0), v(1e9, 4.0), 1);
        assert_eq!(lit(&img), vec![(0, 3), (1, 3), (2, 3), (3, 3)]);

        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(-1e6, -1e6), v(1e6, 1e6), 1);
        assert_eq!(lit(&img), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        // Both ends at the float limits still terminate without overflow.
        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(-f32::MAX, 1.0), v(f32::MAX, 1.0), 1);
        assert!(lit(&img).iter().all(|&(_, y)| y == 1));
    }

    #[test]
    fn non_finite_points_draw_nothing() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(f32::NAN, 1.0), v(2.0, 2.0), 1);
        draw_line(&mut img, v(1.0, 1.0), v(f32::INFINITY, 1.0), 1);
        draw_line(&mut img, v(1.0, f32::NEG_INFINITY), v(1.0, 2.0), 1);
        assert!(lit(&img).is_empty());
    }

    #[test]
    fn empty_target_is_left_alone() {
        let mut img = DynMatrix::filled(0, 4, 0u8);
        draw_line(&mut img, v(0.0, 0.0), v(3.0, 0.0), 1);
        assert_eq!(img.shape(), (0, 4));
    }

    #[test]
    fn off_screen_segments_are_clipped() {
        let mut img = DynMatrix::filled(4, 4, 0u8);
        draw_line(&mut img, v(-5.0, 2.0), v(10.0, 2.0), 1);
        draw_line(&mut img, v(-50.0, -50.0), v(-10.0, -3.0), 1);
        assert_eq!(lit(&img), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }
}
