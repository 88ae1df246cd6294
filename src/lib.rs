//! Fixed-size linear algebra and a CPU scanline rasterizer, driving a
//! rotating cube demo.
//!
//! The core ([`math`] and [`render`]) has no dependency on any windowing
//! system. SDL2 is only used by the optional [`window`] module (enabled by the
//! default `window` feature) to display the frames the [`Engine`] produces.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastercube::prelude::*;
//!
//! let mut engine = Engine::new(Config::default());
//! engine.update();
//! engine.render();
//! let argb = engine.frame_bytes();
//! ```

// Public API - exposed to library consumers
pub mod config;
pub mod cube;
pub mod engine;
pub mod math;
pub mod projection;
pub mod render;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use engine::{Engine, RenderMode};
pub use projection::Projection;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastercube::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::Config;
    pub use crate::engine::{Engine, RenderMode};

    // Math
    pub use crate::math::dyn_matrix::DynMatrix;
    pub use crate::math::matrix::{Matrix, Matrix2, Matrix3, Matrix4};
    pub use crate::math::transform::{extend, identity, rotation, translation};
    pub use crate::math::vector::{Vector, Vector2, Vector3, Vector4};

    // Rendering
    pub use crate::render::rasterizer::{draw_triangle, draw_triangle_with_depth, PixelSink};

    // Window & Input
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
