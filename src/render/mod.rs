//! Rasterization and the mesh render pipelines.

pub mod framebuffer;
pub mod hull;
pub mod line;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::{FrameBuffer, PixelTarget};
pub use hull::{clockwise_less, clockwise_side, in_convex_hull, sort_clockwise};
pub use line::{draw_line, line, line_between};
pub use rasterizer::{
    BarycentricRasterizer, HullRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType,
    ScanlineRasterizer,
};
pub use renderer::{mesh, surf, RenderOptions, RenderStats, Renderer, Viewport, YAxis};
