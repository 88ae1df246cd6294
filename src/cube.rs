//! Cube topology derived from vertex index bit patterns.
//!
//! Vertex `i` of the cube sits at `(±1, ±1, ±1)`, where coordinate `k` is `+1`
//! when bit `k` of `i` is set and `-1` otherwise. Edges and faces then fall
//! out of the bit patterns: two vertices share an edge when their indices
//! differ in exactly one bit, and a face is the set of vertices with one bit
//! held fixed.

use crate::math::vector::Vector;

pub const N_VERTICES: usize = 8;
pub const N_EDGES: usize = 12;
pub const N_FACES: usize = 6;

/// A face as four vertex indices ordered around its boundary.
pub type Quad = [usize; 4];

/// Position of vertex `index` in model space.
pub fn vertex(index: usize) -> Vector<f32, 3> {
    debug_assert!(index < N_VERTICES, "cube has no vertex {index}");
    let coord = |bit: usize| if index & (1 << bit) != 0 { 1.0 } else { -1.0 };
    Vector::new([coord(0), coord(1), coord(2)])
}

pub fn vertices() -> [Vector<f32, 3>; N_VERTICES] {
    std::array::from_fn(vertex)
}

/// The 12 edges as `(i, j)` with `i < j`.
pub fn edges() -> [(usize, usize); N_EDGES] {
    let mut edges = [(0, 0); N_EDGES];
    let mut n = 0;
    for i in 0..N_VERTICES {
        for bit in 0..3 {
            let j = i | (1 << bit);
            if j != i {
                edges[n] = (i, j);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, N_EDGES);
    edges
}

/// The 6 faces, one per (axis, side) pair.
///
/// Each quad walks around its face: the two free bits are visited in Gray
/// code order `00, 01, 11, 10`, so consecutive vertices differ in one bit.
pub fn faces() -> [Quad; N_FACES] {
    std::array::from_fn(|face| {
        let fixed = face / 2;
        let side = (face % 2) << fixed;
        let (lo, hi) = match fixed {
            0 => (1 << 1, 1 << 2),
            1 => (1 << 0, 1 << 2),
            _ => (1 << 0, 1 << 1),
        };
        [side, side | lo, side | lo | hi, side | hi]
    })
}

/// Splits a quad into the two triangles that cover it.
pub fn triangulate(quad: &Quad) -> [[usize; 3]; 2] {
    [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]]
}
