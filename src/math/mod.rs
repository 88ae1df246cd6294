//! Linear algebra: fixed-size vectors and matrices, the runtime-sized
//! [`DynMatrix`](dyn_matrix::DynMatrix) used for pixel buffers, and transform
//! builders.

pub mod dyn_matrix;
pub mod matrix;
pub mod scalar;
pub mod transform;
pub mod vector;
