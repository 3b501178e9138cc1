//! A minimal CPU software rasterizer.
//!
//! Loads triangle meshes from Wavefront OBJ text, maps them straight onto a
//! pixel grid and draws them as wireframes or flat-shaded (Lambertian)
//! triangles. Everything runs on the CPU and writes into any [`PixelTarget`];
//! the optional `viewer` feature adds an SDL2 window for display.
//!
//! # Quick Start
//!
//! ```
//! use flatline::prelude::*;
//!
//! let model = Model::cube();
//! let mut framebuffer = FrameBuffer::new(64, 64);
//! let stats = surf(&model, &mut framebuffer, &Argb8888, Point3d::new(0.0, 0.0, -1.0));
//! assert_eq!(stats.drawn, 2);
//! ```
//!
//! [`PixelTarget`]: render::PixelTarget

pub mod colors;
pub mod error;
pub mod light;
pub mod math;
pub mod model;
pub mod obj;
pub mod primitives;
pub mod render;
#[cfg(feature = "viewer")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use error::{FrameBufferError, LoadError, MathError, ModelError, ParseError};
pub use model::{Face, Model};
pub use render::{mesh, surf, FrameBuffer, PixelTarget, RasterizerType, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use flatline::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::{Vec2, Vec2f, Vec2i, Vec3, Vec3f, Vec3i, VecN};

    // Geometry
    pub use crate::primitives::{Pixel, Point2d, Point3d, ScreenTriangle};

    // Model
    pub use crate::model::{Face, Model};

    // Colours & lighting
    pub use crate::colors::{Argb8888, PixelFormat, Rgba8888};
    pub use crate::light::DirectionalLight;

    // Rendering
    pub use crate::render::{
        mesh, surf, FrameBuffer, PixelTarget, RasterizerType, RenderOptions, RenderStats, Renderer, YAxis,
    };

    // Window & Input
    #[cfg(feature = "viewer")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        BarycentricRasterizer, FrameBuffer, HullRasterizer, Rasterizer, ScanlineRasterizer,
    };
}
