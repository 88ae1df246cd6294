//! Software rendering into [`DynMatrix`](crate::math::dyn_matrix::DynMatrix)
//! frame buffers.

pub mod blit;
pub mod line;
pub mod rasterizer;

pub use blit::{blit_grey, blit_threshold};
pub use line::draw_line;
pub use rasterizer::{draw_triangle, draw_triangle_with_depth};
